//! Skeletal wireframes from per-frame body keypoints, and per-action time
//! totals from classifier predictions.
//!
//! Observations from an upstream detector are turned into [`pose::Pose`]
//! values by an [`pose::Assembler`]; each pose carries its landmarks, the
//! connections between detected joints and a bounding-box area that
//! [`wireframe`] uses to size its draw instructions. Independently, a
//! [`prediction::PredictionAggregator`] sums the frames each predicted action
//! spans, for a [`summary::Summary`] to present.

pub mod error;
pub mod observation;
pub mod pose;
pub mod prediction;
pub mod relay;
pub mod replay;
pub mod summary;
pub mod transform;
pub mod wireframe;

pub use error::Error;
