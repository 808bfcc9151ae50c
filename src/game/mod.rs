// Public API
pub use judge::{judge, Outcome};
pub use moves::Move;
pub use transitions::{MoveCounts, TransitionModel};

// Internal modules
mod judge;
mod moves;
mod transitions;
