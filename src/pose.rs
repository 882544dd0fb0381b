mod area;
mod assemble;
mod connection;
mod joint;
mod landmark;
mod point;

pub use area::estimate_area;
pub use assemble::{Assembler, Pose};
pub use connection::{build_connections, Connection, JointPair};
pub use joint::{JointName, NUM_JOINTS};
pub use landmark::{Landmark, DEFAULT_LANDMARK_THRESHOLD};
pub use point::Point;

pub mod constants {
    use crate::pose::{JointName::*, JointPair};

    /// Joint pairs drawn as wireframe connections, in drawing order.
    pub const JOINT_PAIRS: [JointPair; 13] = [
        // left arm
        (LeftShoulder, LeftElbow),
        (LeftElbow, LeftWrist),
        // left leg
        (LeftHip, LeftKnee),
        (LeftKnee, LeftAnkle),
        // right arm
        (RightShoulder, RightElbow),
        (RightElbow, RightWrist),
        // right leg
        (RightHip, RightKnee),
        (RightKnee, RightAnkle),
        // torso
        (LeftShoulder, Neck),
        (RightShoulder, Neck),
        (LeftShoulder, LeftHip),
        (RightShoulder, RightHip),
        (LeftHip, RightHip),
    ];
}
