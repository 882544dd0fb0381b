//! Action predictions and their per-label frame totals.

use serde::Deserialize;
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

/// Shown in place of a confidence when a prediction has none.
pub const OBSERVING: &str = "Observing...";

/// Labels the application itself shows while no model prediction is available.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppLabel {
    Starting,
    NoPerson,
    LowConfidence,
}

impl AppLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starting => "Starting Up",
            Self::NoPerson => "No Person",
            Self::LowConfidence => "Low Confidence",
        }
    }
}

/// A prediction from the action classifier, or a status label standing in for one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ActionPrediction {
    Model { label: String, confidence: f32 },
    App { status: AppLabel },
}

impl ActionPrediction {
    pub fn model<S: Into<String>>(label: S, confidence: f32) -> Self {
        Self::Model {
            label: label.into(),
            confidence,
        }
    }

    pub fn app(status: AppLabel) -> Self {
        Self::App { status }
    }

    pub fn is_model_label(&self) -> bool {
        matches!(self, Self::Model { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Model { label, .. } => label,
            Self::App { status } => status.as_str(),
        }
    }

    pub fn confidence(&self) -> Option<f32> {
        match *self {
            Self::Model { confidence, .. } => Some(confidence),
            Self::App { .. } => None,
        }
    }

    /// Confidence as a whole percentage, e.g. `"93%"`.
    pub fn confidence_string(&self) -> Option<String> {
        self.confidence()
            .map(|confidence| format!("{:.0}%", confidence * 100.0))
    }

    pub fn display_confidence(&self) -> String {
        self.confidence_string()
            .unwrap_or_else(|| OBSERVING.to_owned())
    }
}

/// Cumulative frame count per predicted action label.
///
/// Counts only ever grow. Safe to record into from several threads while
/// another takes snapshots.
#[derive(Debug, Default)]
pub struct PredictionAggregator {
    counts: Mutex<HashMap<String, u64>>,
}

impl PredictionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `frame_count` frames to `label`, returning the new total.
    pub fn record_event(&self, label: &str, frame_count: u64) -> u64 {
        // every update leaves the map consistent, so a poisoned lock is still usable
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        let total = counts.entry(label.to_owned()).or_insert(0);
        *total = total.saturating_add(frame_count);
        *total
    }

    /// Record `prediction` if it came from the model. Status labels are
    /// ignored and return `None`.
    pub fn observe(&self, prediction: &ActionPrediction, frame_count: u64) -> Option<u64> {
        match prediction {
            ActionPrediction::Model { label, .. } => Some(self.record_event(label, frame_count)),
            ActionPrediction::App { .. } => None,
        }
    }

    /// Copy of the current totals.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
