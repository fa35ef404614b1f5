//! Command-line and environment configuration for the game binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing::Level;

use crate::core::rng::{entropy_seed, PieceSource, SevenBag, SimpleRng};
use crate::core::SessionConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    /// Seed for the piece generator (random when omitted)
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u32>,

    /// Draw pieces from shuffled bags of seven instead of uniformly
    #[arg(long, env = "BLOCKFALL_BAG")]
    pub bag: bool,

    /// Reject rotations that would overlap a wall or the stack
    #[arg(long, env = "BLOCKFALL_VALIDATE_ROTATION")]
    pub validate_rotation: bool,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long, env = "BLOCKFALL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v = WARN, -vv = INFO, -vvv = DEBUG, -vvvv = TRACE)"
    )]
    pub verbose: u8,
}

impl Cli {
    /// Log level for the current verbosity; ERROR when no `-v` is given.
    pub fn log_level(&self) -> Level {
        let verbosity = self.verbose.saturating_add(1).clamp(1, 5);
        Level::from_str(verbosity.to_string().as_str()).unwrap_or(Level::ERROR)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default().with_validate_rotation(self.validate_rotation)
    }

    /// Seed to use, drawing one from OS entropy when none was given
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(entropy_seed)
    }

    /// Piece source for the chosen randomizer
    pub fn piece_source(&self, seed: u32) -> Box<dyn PieceSource> {
        if self.bag {
            Box::new(SevenBag::new(seed))
        } else {
            Box::new(SimpleRng::new(seed))
        }
    }
}
