//! Export of landmark data to an external endpoint.
//!
//! Delivery is best effort: callers log failures and move on.

use crate::{error::Error, pose::Pose};
use serde::Serialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// One landmark, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkRecord {
    pub name: &'static str,
    pub x: f32,
    pub y: f32,
    pub confidence: f32,
}

/// Records for every landmark of every pose, pose by pose.
pub fn records_for_poses(poses: &[Pose]) -> Vec<LandmarkRecord> {
    poses
        .iter()
        .flat_map(|pose| pose.landmarks())
        .map(|landmark| LandmarkRecord {
            name: landmark.name().as_str(),
            x: landmark.location().x(),
            y: landmark.location().y(),
            confidence: landmark.confidence(),
        })
        .collect()
}

/// Serialize each record on its own, as the relay endpoint expects.
pub fn encode_records(records: &[LandmarkRecord]) -> Result<Vec<String>, Error> {
    records
        .iter()
        .map(|record| serde_json::to_string(record).map_err(Error::SerializeLandmark))
        .collect()
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    #[serde(rename = "poseData")]
    pose_data: &'a [String],
}

/// Somewhere to send landmark records.
pub trait RelaySink {
    fn send(&self, records: &[LandmarkRecord]) -> Result<(), Error>;
}

#[derive(Debug, Clone, Default, structopt::StructOpt)]
pub struct RelayConfig {
    /// URL to POST landmark records to. Nothing is sent when unset.
    #[structopt(long = "relay-endpoint")]
    pub endpoint: Option<String>,
}

impl RelayConfig {
    /// The configured HTTP relay, if an endpoint is set.
    pub fn sink(&self) -> Option<HttpRelay> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
            .map(HttpRelay::new)
    }
}

/// Posts `{"poseData": [<record json>, ...]}` to an endpoint.
#[derive(Debug)]
pub struct HttpRelay {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpRelay {
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RelaySink for HttpRelay {
    fn send(&self, records: &[LandmarkRecord]) -> Result<(), Error> {
        if records.is_empty() {
            return Ok(());
        }
        let pose_data = encode_records(records)?;
        self.agent
            .post(&self.endpoint)
            .set("Accept", "application/json")
            .send_json(Payload {
                pose_data: &pose_data,
            })
            .map_err(|e| Error::RelayRequest(Box::new(e), self.endpoint.clone()))?;
        Ok(())
    }
}
