//! Win celebration: a burst of falling particles in the winner's colours.

use crate::glyphs::glyph_for;
use gridline_core::{GameEvent, GameEventHandler, HandlerError, PlayerId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::Color;
use tracing::{debug, instrument};

const PARTICLES_PER_BURST: usize = 48;
const BURSTS: u8 = 3;
const BURST_INTERVAL: u16 = 12;
const GRAVITY: f32 = 0.08;
const SPARKS: [char; 4] = ['*', '+', '·', '•'];

/// One spark of the effect.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct Particle {
    /// Column, in terminal cells.
    pub x: f32,
    /// Row, in terminal cells.
    pub y: f32,
    /// Horizontal speed per tick.
    pub vx: f32,
    /// Vertical speed per tick; negative is up.
    pub vy: f32,
    /// Ticks left before the particle disappears.
    pub life: u16,
    /// Character drawn.
    pub symbol: char,
    /// Colour drawn.
    pub color: Color,
}

/// Decorative particle effect started on a win and cleared on restart.
#[derive(Debug)]
pub struct Celebration {
    rng: StdRng,
    particles: Vec<Particle>,
    width: u16,
    height: u16,
    winner: Option<PlayerId>,
    bursts_left: u8,
    until_next_burst: u16,
}

impl Celebration {
    /// Creates an idle effect with a seeded generator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
            width: 80,
            height: 24,
            winner: None,
            bursts_left: 0,
            until_next_burst: 0,
        }
    }

    /// Sets the drawing area, in terminal cells.
    pub fn set_area(&mut self, width: u16, height: u16) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Live particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Player being celebrated, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Checks if anything is still moving or due to launch.
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty() || self.bursts_left > 0
    }

    /// Starts the effect for `winner`.
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn start(&mut self, winner: PlayerId) {
        debug!("Celebration started");
        self.particles.clear();
        self.winner = Some(winner);
        self.bursts_left = BURSTS;
        self.until_next_burst = 0;
        self.launch_if_due();
    }

    /// Stops the effect immediately.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.winner = None;
        self.bursts_left = 0;
        self.until_next_burst = 0;
    }

    /// Advances the effect by one frame.
    pub fn tick(&mut self) {
        let (width, height) = (f32::from(self.width), f32::from(self.height));
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.life = p.life.saturating_sub(1);
        }
        self.particles
            .retain(|p| p.life > 0 && p.x >= 0.0 && p.x < width && p.y < height);

        self.until_next_burst = self.until_next_burst.saturating_sub(1);
        self.launch_if_due();
    }

    fn launch_if_due(&mut self) {
        let Some(winner) = self.winner else {
            return;
        };
        if self.bursts_left == 0 || self.until_next_burst > 0 {
            return;
        }
        self.bursts_left -= 1;
        self.until_next_burst = BURST_INTERVAL;

        let glyph = glyph_for(winner);
        let origin_x = self.rng.gen_range(0.2f32..0.8) * f32::from(self.width);
        let origin_y = f32::from(self.height) * 0.6;
        for _ in 0..PARTICLES_PER_BURST {
            let color = if self.rng.gen_bool(0.7) {
                glyph.color
            } else {
                Color::White
            };
            let symbol = if self.rng.gen_bool(0.2) {
                glyph.symbol
            } else {
                SPARKS[self.rng.gen_range(0..SPARKS.len())]
            };
            self.particles.push(Particle::new(
                origin_x,
                origin_y,
                self.rng.gen_range(-1.2..1.2),
                self.rng.gen_range(-1.4..-0.3),
                self.rng.gen_range(20..45),
                symbol,
                color,
            ));
        }
    }
}

impl GameEventHandler for Celebration {
    fn handle(&mut self, event: &GameEvent) -> Result<(), HandlerError> {
        match event {
            GameEvent::GameWon(winner) => self.start(*winner),
            GameEvent::GameRestarted => self.clear(),
            GameEvent::MoveAccepted => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "celebration"
    }
}
