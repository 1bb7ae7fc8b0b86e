//! Properties every [`Game`](crate::Game) keeps between commands.
//!
//! The engine checks [`GameInvariants`] after each command in debug builds.

use derive_more::Display;

/// A property of a state `S`.
pub trait Invariant<S> {
    /// What the property says, used in violation reports.
    const DESCRIPTION: &'static str;

    /// Checks if the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Like [`Invariant::holds`], reporting a failure as a violation.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation {
                description: Self::DESCRIPTION,
            })
        }
    }
}

/// A property that failed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the failed property.
    pub description: &'static str,
}

/// Several invariants checked as one; every failure is reported.
pub trait InvariantSet<S> {
    /// Checks each member invariant in order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$($member::check(state)),+]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod grid_shape;
pub mod marker_balance;
pub mod turn_order;

pub use grid_shape::GridShapeInvariant;
pub use marker_balance::MarkerBalanceInvariant;
pub use turn_order::TurnOrderInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (GridShapeInvariant, TurnOrderInvariant, MarkerBalanceInvariant);
