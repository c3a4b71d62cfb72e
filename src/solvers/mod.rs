mod blind;

pub use blind::{BlindSolver, ExplorationReport};
