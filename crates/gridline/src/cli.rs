//! Command-line interface for gridline.

use clap::Parser;
use std::path::PathBuf;

/// Gridline - fill a whole row, column or diagonal to win
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gridline")]
#[command(about = "Turn-based line game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Grid side length (overrides the settings file)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Number of players (overrides the settings file)
    #[arg(short, long)]
    pub players: Option<u8>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable audio cues
    #[arg(long)]
    pub mute: bool,

    /// Where to write logs; the terminal belongs to the game
    #[arg(long, default_value = "gridline.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gridline"]).unwrap();
        assert_eq!(cli.size, None);
        assert_eq!(cli.players, None);
        assert!(!cli.mute);
        assert_eq!(cli.log_file, PathBuf::from("gridline.log"));
    }

    #[test]
    fn test_overrides() {
        let cli =
            Cli::try_parse_from(["gridline", "-s", "7", "--players", "3", "--mute"]).unwrap();
        assert_eq!(cli.size, Some(7));
        assert_eq!(cli.players, Some(3));
        assert!(cli.mute);
    }
}
