pub mod poses;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use poses::{pose_for, truncated_pose, unrecognized_pose, PoseBuilder};
pub use setup::TestSetupBuilder;
