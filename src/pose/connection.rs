use crate::pose::{JointName, Landmark, Point};
use std::collections::HashMap;

/// An unordered pair of joints that are drawn connected.
pub type JointPair = (JointName, JointName);

/// A line between the locations of two detected landmarks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Connection {
    pub(crate) joints: JointPair,
    pub(crate) start: Point,
    pub(crate) end: Point,
}

impl Connection {
    pub fn joints(&self) -> JointPair {
        self.joints
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

/// Emit a connection for every pair in `joint_pairs` whose endpoints both have
/// a landmark. Output order follows `joint_pairs`.
///
/// If a joint appears more than once in `landmarks` the first occurrence is used.
pub fn build_connections(landmarks: &[Landmark], joint_pairs: &[JointPair]) -> Vec<Connection> {
    let mut locations = HashMap::with_capacity(landmarks.len());
    for landmark in landmarks {
        locations.entry(landmark.name).or_insert(landmark.location);
    }

    joint_pairs
        .iter()
        .filter_map(|&(a, b)| {
            let start = *locations.get(&a)?;
            let end = *locations.get(&b)?;
            Some(Connection {
                joints: (a, b),
                start,
                end,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_connections, JointPair};
    use crate::pose::{constants::JOINT_PAIRS, JointName::*, Landmark, Point};

    fn landmark(name: crate::pose::JointName, x: f32, y: f32) -> Landmark {
        Landmark::new(name, Point::new(x, y).unwrap(), 1.0)
    }

    #[test]
    fn arm_without_shoulder_wrist_pair() {
        let landmarks = [
            landmark(LeftShoulder, 0.2, 0.2),
            landmark(LeftElbow, 0.3, 0.4),
            landmark(LeftWrist, 0.35, 0.6),
        ];
        let pairs: [JointPair; 2] = [(LeftShoulder, LeftElbow), (LeftElbow, LeftWrist)];

        let connections = build_connections(&landmarks, &pairs);

        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0].joints(), (LeftShoulder, LeftElbow));
        assert_eq!(connections[0].start(), landmarks[0].location());
        assert_eq!(connections[0].end(), landmarks[1].location());
        assert_eq!(connections[1].joints(), (LeftElbow, LeftWrist));
        assert_eq!(connections[1].start(), landmarks[1].location());
        assert_eq!(connections[1].end(), landmarks[2].location());
    }

    #[test]
    fn missing_endpoint_is_omitted() {
        let landmarks = [landmark(LeftHip, 0.4, 0.6), landmark(LeftAnkle, 0.4, 0.9)];
        let connections = build_connections(&landmarks, &JOINT_PAIRS);
        assert!(connections.is_empty());
    }

    #[test]
    fn order_follows_table_not_landmarks() {
        let landmarks = [
            landmark(RightHip, 0.6, 0.6),
            landmark(LeftHip, 0.4, 0.6),
            landmark(RightShoulder, 0.6, 0.3),
            landmark(LeftShoulder, 0.4, 0.3),
        ];
        let joints: Vec<_> = build_connections(&landmarks, &JOINT_PAIRS)
            .iter()
            .map(|c| c.joints())
            .collect();
        assert_eq!(
            joints,
            vec![
                (LeftShoulder, LeftHip),
                (RightShoulder, RightHip),
                (LeftHip, RightHip),
            ]
        );
    }

    #[test]
    fn repeated_builds_are_identical() {
        let landmarks = [
            landmark(Neck, 0.5, 0.2),
            landmark(LeftShoulder, 0.4, 0.3),
            landmark(RightShoulder, 0.6, 0.3),
        ];
        let first = build_connections(&landmarks, &JOINT_PAIRS);
        let second = build_connections(&landmarks, &JOINT_PAIRS);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn duplicate_joint_uses_first_location() {
        let landmarks = [
            landmark(LeftElbow, 0.3, 0.4),
            landmark(LeftWrist, 0.35, 0.6),
            landmark(LeftElbow, 0.9, 0.9),
        ];
        let connections = build_connections(&landmarks, &[(LeftElbow, LeftWrist)]);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].start(), landmarks[0].location());
    }

    #[test]
    fn empty_landmarks_build_nothing() {
        assert!(build_connections(&[], &JOINT_PAIRS).is_empty());
    }
}
