use serde::{Deserialize, Serialize};

use super::pose::{joint, HandPose, Joint, PoseError};
use crate::game::Move;

/// Result of classifying one well-formed pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "move", rename_all = "lowercase")]
pub enum Gesture {
    Recognized(Move),
    Unrecognized,
}

/// Open/closed flags per finger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Read finger states off a pose.
    ///
    /// A finger is open when its tip sits higher in the frame than its PIP
    /// joint. The thumb is open when its tip is right of its IP joint, which
    /// only holds for one hand/camera mirroring convention; a mirrored feed
    /// or the other hand flips it.
    pub fn from_pose(pose: &HandPose) -> Result<Self, PoseError> {
        let joints = pose.validated()?;
        let finger_open = |tip: usize, pip: usize| is_above(&joints[tip], &joints[pip]);

        Ok(Self {
            thumb: joints[joint::THUMB_TIP].x > joints[joint::THUMB_IP].x,
            index: finger_open(joint::INDEX_TIP, joint::INDEX_PIP),
            middle: finger_open(joint::MIDDLE_TIP, joint::MIDDLE_PIP),
            ring: finger_open(joint::RING_TIP, joint::RING_PIP),
            pinky: finger_open(joint::PINKY_TIP, joint::PINKY_PIP),
        })
    }

    fn fingers(&self) -> [bool; 4] {
        [self.index, self.middle, self.ring, self.pinky]
    }

    /// Map finger states to a move; first matching rule wins
    pub fn gesture(&self) -> Gesture {
        let fingers = self.fingers();

        if fingers.iter().all(|open| !open) && !self.thumb {
            Gesture::Recognized(Move::Rock)
        } else if self.index && self.middle && !self.ring && !self.pinky {
            Gesture::Recognized(Move::Scissors)
        } else if fingers.iter().all(|open| *open) && self.thumb {
            Gesture::Recognized(Move::Paper)
        } else {
            Gesture::Unrecognized
        }
    }
}

fn is_above(tip: &Joint, pip: &Joint) -> bool {
    tip.y < pip.y
}

/// Classify a single hand pose into a move
pub fn classify(pose: &HandPose) -> Result<Gesture, PoseError> {
    Ok(FingerStates::from_pose(pose)?.gesture())
}
