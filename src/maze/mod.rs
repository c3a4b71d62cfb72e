mod cell;
mod grid;
mod moves;
mod position;
mod tree;

pub use cell::Cell;
pub use grid::Grid;
pub use moves::{Move, Sensors};
pub use position::Position;
pub use tree::{ExplorationTree, NodeId};
