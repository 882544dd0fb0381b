use std::{collections::HashMap, fmt};

pub const DEFAULT_FRAME_RATE: &str = "30";

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub frames: u64,
    pub seconds: f64,
}

/// Time spent on each action, longest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    rows: Vec<SummaryRow>,
}

impl Summary {
    /// Build a summary from aggregated frame counts. A non-positive
    /// `frame_rate` falls back to [`DEFAULT_FRAME_RATE`].
    pub fn new(counts: &HashMap<String, u64>, frame_rate: f64) -> Self {
        let frame_rate = if frame_rate > 0.0 {
            frame_rate
        } else {
            DEFAULT_FRAME_RATE.parse().unwrap()
        };

        let mut rows: Vec<_> = counts
            .iter()
            .map(|(label, &frames)| SummaryRow {
                label: label.clone(),
                frames,
                seconds: frames as f64 / frame_rate,
            })
            .collect();
        rows.sort_by(|a, b| b.frames.cmp(&a.frames).then_with(|| a.label.cmp(&b.label)));

        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for SummaryRow { label, seconds, .. } in &self.rows {
            writeln!(f, "{:<24} {:>8.1}s", label, seconds)?;
        }
        Ok(())
    }
}
