use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of joints a tracked hand must carry
pub const JOINT_COUNT: usize = 21;

/// Anatomical joint indices within a [`HandPose`]
pub mod joint {
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_PIP: usize = 14;
    pub const RING_TIP: usize = 16;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_TIP: usize = 20;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoseError {
    #[error("Malformed hand pose: expected 21 joints, found {found}")]
    Malformed { found: usize },
}

/// A tracked joint, normalized to [0, 1] relative to the visible frame.
/// `y` grows downwards. Depth is carried through but unused.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Joint {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Joint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: None }
    }
}

/// One hand's joints as delivered by the tracker.
///
/// Any length is representable so tracker payloads can be rejected with a
/// [`PoseError`] instead of failing to deserialize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HandPose {
    pub joints: Vec<Joint>,
}

impl HandPose {
    pub fn new(joints: Vec<Joint>) -> Self {
        Self { joints }
    }

    /// Borrow the joints as a fixed 21-element array
    pub fn validated(&self) -> Result<&[Joint; JOINT_COUNT], PoseError> {
        self.joints
            .as_slice()
            .try_into()
            .map_err(|_| PoseError::Malformed {
                found: self.joints.len(),
            })
    }
}
