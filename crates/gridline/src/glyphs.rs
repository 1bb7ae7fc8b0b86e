//! Player glyphs.
//!
//! A glyph depends on nothing but the player id.

use gridline_core::PlayerId;
use ratatui::style::Color;

/// How a player's marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Character drawn in the cell.
    pub symbol: char,
    /// Foreground colour of the marker.
    pub color: Color,
}

const PALETTE: [Glyph; 9] = [
    Glyph {
        symbol: 'X',
        color: Color::Blue,
    },
    Glyph {
        symbol: 'O',
        color: Color::Red,
    },
    Glyph {
        symbol: '▲',
        color: Color::Green,
    },
    Glyph {
        symbol: '■',
        color: Color::Yellow,
    },
    Glyph {
        symbol: '◆',
        color: Color::Magenta,
    },
    Glyph {
        symbol: '★',
        color: Color::Cyan,
    },
    Glyph {
        symbol: '♣',
        color: Color::LightGreen,
    },
    Glyph {
        symbol: '♠',
        color: Color::LightBlue,
    },
    Glyph {
        symbol: '♥',
        color: Color::LightRed,
    },
];

/// Returns the glyph for `player`.
///
/// Ids past the palette wrap around, so every id has a glyph.
pub fn glyph_for(player: PlayerId) -> Glyph {
    PALETTE[player.slot() % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_core::MAX_PLAYERS;
    use std::collections::HashSet;

    #[test]
    fn test_supported_players_have_distinct_glyphs() {
        let symbols: HashSet<char> = PlayerId::all(MAX_PLAYERS)
            .map(|p| glyph_for(p).symbol)
            .collect();
        assert_eq!(symbols.len(), usize::from(MAX_PLAYERS));
    }

    #[test]
    fn test_first_players() {
        assert_eq!(glyph_for(PlayerId::FIRST).symbol, 'X');
        assert_eq!(glyph_for(PlayerId::new(2).unwrap()).symbol, 'O');
    }

    #[test]
    fn test_total_over_all_ids() {
        let far = PlayerId::new(u8::MAX).unwrap();
        assert_eq!(glyph_for(far), PALETTE[(usize::from(u8::MAX) - 1) % PALETTE.len()]);
    }
}
