use handrps::gesture::{joint, HandPose, Joint, JOINT_COUNT};
use handrps::Move;

// ============================================================================
// Pose Builders
// ============================================================================

/// Builds 21-joint poses with chosen fingers open or closed
pub struct PoseBuilder {
    thumb: bool,
    fingers: [bool; 4],
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self {
            thumb: false,
            fingers: [false; 4],
        }
    }

    pub fn thumb(mut self, open: bool) -> Self {
        self.thumb = open;
        self
    }

    /// index, middle, ring, pinky
    pub fn fingers(mut self, open: [bool; 4]) -> Self {
        self.fingers = open;
        self
    }

    pub fn for_move(mv: Move) -> Self {
        match mv {
            Move::Rock => Self::new(),
            Move::Scissors => Self::new().fingers([true, true, false, false]),
            Move::Paper => Self::new().thumb(true).fingers([true; 4]),
        }
    }

    pub fn build(self) -> HandPose {
        let mut joints: Vec<Joint> = (0..JOINT_COUNT)
            .map(|i| Joint {
                x: 0.5,
                y: 0.8 - i as f32 * 0.01,
                z: Some(0.0),
            })
            .collect();

        joints[joint::THUMB_IP] = Joint::new(0.45, 0.6);
        joints[joint::THUMB_TIP] = Joint::new(if self.thumb { 0.55 } else { 0.35 }, 0.6);

        let fingers = [
            (joint::INDEX_TIP, joint::INDEX_PIP),
            (joint::MIDDLE_TIP, joint::MIDDLE_PIP),
            (joint::RING_TIP, joint::RING_PIP),
            (joint::PINKY_TIP, joint::PINKY_PIP),
        ];
        for ((tip, pip), open) in fingers.into_iter().zip(self.fingers) {
            joints[pip] = Joint::new(0.5, 0.5);
            joints[tip] = Joint::new(0.5, if open { 0.3 } else { 0.55 });
        }

        HandPose::new(joints)
    }
}

pub fn pose_for(mv: Move) -> HandPose {
    PoseBuilder::for_move(mv).build()
}

pub fn unrecognized_pose() -> HandPose {
    // pointing finger
    PoseBuilder::new().fingers([true, false, false, false]).build()
}

pub fn truncated_pose(joints: usize) -> HandPose {
    let mut pose = pose_for(Move::Rock);
    pose.joints.truncate(joints);
    pose
}
