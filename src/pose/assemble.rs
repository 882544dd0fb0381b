use crate::{
    observation::Observation,
    pose::{
        area::estimate_area,
        connection::{build_connections, Connection},
        constants::JOINT_PAIRS,
        landmark::DEFAULT_LANDMARK_THRESHOLD,
        Landmark, NUM_JOINTS,
    },
};
use bitvec::bitvec;
use ndarray::Array2;
use tracing::{debug, warn};

/// The landmarks of one detected person in one frame, along with everything
/// derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    landmarks: Vec<Landmark>,
    connections: Vec<Connection>,
    keypoints: Option<Array2<f32>>,
    area: f32,
}

impl Pose {
    /// Build a pose from its landmarks, or `None` if there are none.
    ///
    /// `Root` landmarks are dropped, and for a repeated joint only the first
    /// landmark is kept. Area and connections are computed here, once.
    pub fn new(mut landmarks: Vec<Landmark>, keypoints: Option<Array2<f32>>) -> Option<Self> {
        let mut seen = bitvec![0; NUM_JOINTS];
        landmarks.retain(|landmark| match landmark.name.idx() {
            Ok(index) if !landmark.name.is_root() && !seen[index] => {
                seen.set(index, true);
                true
            }
            _ => false,
        });
        if landmarks.is_empty() {
            return None;
        }
        let area = estimate_area(&landmarks);
        let connections = build_connections(&landmarks, &JOINT_PAIRS);
        Some(Self {
            landmarks,
            connections,
            keypoints,
            area,
        })
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The raw keypoint array of the source observation, if it could be captured.
    pub fn keypoints(&self) -> Option<&Array2<f32>> {
        self.keypoints.as_ref()
    }

    pub fn area(&self) -> f32 {
        self.area
    }
}

/// Turns detector observations into poses.
#[derive(Debug, Clone, Copy, structopt::StructOpt)]
pub struct Assembler {
    /// Minimum confidence for a joint to count as recognized.
    #[structopt(short = "-T", long, default_value = DEFAULT_LANDMARK_THRESHOLD)]
    pub landmark_threshold: f32,
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            landmark_threshold: DEFAULT_LANDMARK_THRESHOLD.parse().unwrap(),
        }
    }
}

impl Assembler {
    pub fn new(landmark_threshold: f32) -> Self {
        Self { landmark_threshold }
    }

    /// Assemble a single observation. Returns `None` when no joint of the
    /// observation could be turned into a landmark.
    pub fn assemble<O>(&self, observation: &O) -> Option<Pose>
    where
        O: Observation + ?Sized,
    {
        let mut seen = bitvec![0; NUM_JOINTS];
        let mut landmarks = Vec::with_capacity(NUM_JOINTS);

        for joint in observation.available_joint_names() {
            if joint.is_root() {
                continue;
            }

            let index = match joint.idx() {
                Ok(index) => index,
                Err(error) => {
                    warn!(message = "skipping joint", %error);
                    continue;
                }
            };
            if seen[index] {
                warn!(message = "ignoring repeated joint in observation", %joint);
                continue;
            }
            seen.set(index, true);

            let point = match observation.recognized_point(joint) {
                Ok(point) => point,
                Err(_) => continue,
            };

            if let Some(landmark) = Landmark::from_recognized(joint, point, self.landmark_threshold)
            {
                landmarks.push(landmark);
            }
        }

        if landmarks.is_empty() {
            debug!(message = "dropping observation without landmarks");
            return None;
        }

        let keypoints = match observation.keypoints_array() {
            Ok(keypoints) => Some(keypoints),
            Err(error) => {
                debug!(message = "keypoints array unavailable", %error);
                None
            }
        };

        Pose::new(landmarks, keypoints)
    }

    /// Assemble every observation, keeping input order and dropping those that
    /// produce no pose.
    pub fn assemble_all<O>(&self, observations: &[O]) -> Vec<Pose>
    where
        O: Observation,
    {
        observations
            .iter()
            .filter_map(|observation| self.assemble(observation))
            .collect()
    }
}
