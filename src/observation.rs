//! The per-person output of an upstream pose detector.

use crate::{error::Error, pose::JointName};
use ndarray::{Array2, ErrorKind, ShapeError};
use serde::Deserialize;
use tracing::warn;

/// Number of values per keypoint in a keypoints array: x, y, confidence.
const KEYPOINT_CHANNELS: usize = 3;

/// A point the detector reported for a joint.
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct RecognizedPoint {
    pub x: f32,
    pub y: f32,
    pub confidence: f32,
}

impl RecognizedPoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }
}

/// What pose assembly needs from a detector observation.
pub trait Observation {
    /// Joint names the observation knows about, in detector order.
    fn available_joint_names(&self) -> Vec<JointName>;

    /// Look up the point recognized for `joint`. Failure is expected for
    /// occluded or undetected joints.
    fn recognized_point(&self, joint: JointName) -> Result<RecognizedPoint, Error>;

    /// The raw keypoints as a `3 x N` array (x, y, confidence rows).
    fn keypoints_array(&self) -> Result<Array2<f32>, Error>;
}

#[derive(Debug, Deserialize)]
struct RawJoint {
    name: String,
    x: f32,
    y: f32,
    confidence: f32,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    #[serde(default)]
    joints: Vec<RawJoint>,
    #[serde(default)]
    keypoints: Option<Vec<Vec<f32>>>,
}

/// An in-memory observation, as read from a replay file.
///
/// Joint entries with names outside the vocabulary are dropped with a warning
/// when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawObservation")]
pub struct KeypointObservation {
    joints: Vec<(JointName, RecognizedPoint)>,
    keypoints: Option<Vec<Vec<f32>>>,
}

impl KeypointObservation {
    pub fn new(joints: Vec<(JointName, RecognizedPoint)>) -> Self {
        Self {
            joints,
            keypoints: None,
        }
    }

    pub fn with_keypoints(mut self, keypoints: Vec<Vec<f32>>) -> Self {
        self.keypoints = Some(keypoints);
        self
    }
}

impl From<RawObservation> for KeypointObservation {
    fn from(raw: RawObservation) -> Self {
        let joints = raw
            .joints
            .into_iter()
            .filter_map(|RawJoint { name, x, y, confidence }| match name.parse() {
                Ok(joint) => Some((joint, RecognizedPoint::new(x, y, confidence))),
                Err(error) => {
                    warn!(message = "skipping joint entry", %error);
                    None
                }
            })
            .collect();
        Self {
            joints,
            keypoints: raw.keypoints,
        }
    }
}

impl Observation for KeypointObservation {
    fn available_joint_names(&self) -> Vec<JointName> {
        self.joints.iter().map(|&(joint, _)| joint).collect()
    }

    fn recognized_point(&self, joint: JointName) -> Result<RecognizedPoint, Error> {
        self.joints
            .iter()
            .find(|&&(name, _)| name == joint)
            .map(|&(_, point)| point)
            .ok_or(Error::GetRecognizedPoint(joint))
    }

    fn keypoints_array(&self) -> Result<Array2<f32>, Error> {
        let rows = self.keypoints.as_ref().ok_or(Error::GetKeypointsArray)?;
        if rows.iter().any(|row| row.len() != KEYPOINT_CHANNELS) {
            return Err(Error::ConstructKeypointsArray(ShapeError::from_kind(
                ErrorKind::IncompatibleShape,
            )));
        }
        let values = rows.iter().flatten().copied().collect();
        Ok(Array2::from_shape_vec((rows.len(), KEYPOINT_CHANNELS), values)
            .map_err(Error::ConstructKeypointsArray)?
            .reversed_axes())
    }
}
