use crate::{
    observation::RecognizedPoint,
    pose::{JointName, Point},
};

pub const DEFAULT_LANDMARK_THRESHOLD: &str = "0.2";

/// A detected anatomical point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Landmark {
    pub(crate) name: JointName,
    pub(crate) location: Point,
    pub(crate) confidence: f32,
}

impl Landmark {
    pub fn new(name: JointName, location: Point, confidence: f32) -> Self {
        Self {
            name,
            location,
            confidence,
        }
    }

    /// Build a landmark from a recognized point, or `None` when the point is
    /// below `threshold` or any of its values is non-finite or outside `[0, 1]`.
    pub(crate) fn from_recognized(
        name: JointName,
        point: RecognizedPoint,
        threshold: f32,
    ) -> Option<Self> {
        if !is_unit(point.x) || !is_unit(point.y) || !is_unit(point.confidence) {
            return None;
        }
        if point.confidence < threshold {
            return None;
        }
        let location = Point::new(point.x, point.y).ok()?;
        Some(Self::new(name, location, point.confidence))
    }

    pub fn name(&self) -> JointName {
        self.name
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

fn is_unit(value: f32) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
