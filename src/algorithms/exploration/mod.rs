mod ambush;
mod predicates;
mod theseus;
mod thread;
pub mod traits;
mod wall_follower;

pub use theseus::Theseus;
pub use thread::AriadneThread;
pub use traits::ExplorationAlgorithm;
pub use wall_follower::WallFollower;
