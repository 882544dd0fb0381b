use crate::pose::JointName;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to construct NotNan from f32: {1}")]
    ConstructNotNan(#[source] ordered_float::FloatIsNan, f32),

    #[error("failed to convert joint variant to usize: {0:?}")]
    JointVariantToUSize(JointName),

    #[error("unknown joint name: {0:?}")]
    ParseJointName(String),

    #[error("joint {0:?} has no recognized point")]
    GetRecognizedPoint(JointName),

    #[error("observation carries no keypoints array")]
    GetKeypointsArray,

    #[error("failed to construct keypoints array from observation")]
    ConstructKeypointsArray(#[source] ndarray::ShapeError),

    #[error("failed to open replay file: {1:?}")]
    OpenReplayFile(#[source] std::io::Error, std::path::PathBuf),

    #[error("failed to read frame at line {1}")]
    ReadFrame(#[source] std::io::Error, usize),

    #[error("failed to parse frame at line {1}")]
    ParseFrame(#[source] serde_json::Error, usize),

    #[error("failed to serialize landmark record")]
    SerializeLandmark(#[source] serde_json::Error),

    #[error("failed to post landmark records to {1}")]
    RelayRequest(#[source] Box<ureq::Error>, String),

    #[cfg(feature = "gui")]
    #[error("failed to draw line")]
    DrawLine(#[source] opencv::Error),

    #[cfg(feature = "gui")]
    #[error("failed to draw circle")]
    DrawCircle(#[source] opencv::Error),

    #[cfg(feature = "gui")]
    #[error("failed to convert Point {0:?} to Point2i")]
    ConvertPointToPoint2i(crate::pose::Point),
}
