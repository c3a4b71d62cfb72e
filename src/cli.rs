use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "theseus")]
#[command(about = "Blind maze explorer guided by an Ariadne thread")]
pub struct Args {
    /// Sets the logger's verbosity level (debug shows the Ariadne thread
    /// and the loop/ambush decisions)
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Map file to explore ('#' wall, '.' free, 'S' start); a bundled
    /// dungeon is used when omitted
    #[arg(short, long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Exploration algorithm to use
    #[arg(short, long, value_enum, default_value_t = ExplorationAlgorithm::Theseus)]
    pub exploration: ExplorationAlgorithm,

    /// Delay between moves in milliseconds (0 = no delay)
    #[arg(short, long, default_value_t = 0)]
    pub delay: u64,

    /// Abort the run after this many steps
    #[arg(long, default_value_t = 100_000)]
    pub max_steps: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExplorationAlgorithm {
    /// Ariadne-thread explorer with loop and ambush avoidance
    Theseus,

    /// Wall follower using left-hand rule
    #[value(name = "wall-follower")]
    WallFollower,
}

impl ExplorationAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Theseus => "Theseus",
            Self::WallFollower => "Wall Follower",
        }
    }
}
