// Hand pose input and the geometric move classifier

// Public API
pub use classifier::{classify, FingerStates, Gesture};
pub use pose::{joint, HandPose, Joint, PoseError, JOINT_COUNT};

// Internal modules
mod classifier;
mod pose;
