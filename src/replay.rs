//! Recorded detector output, one JSON frame per line.

use crate::{error::Error, observation::KeypointObservation, prediction::ActionPrediction};
use serde::Deserialize;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Detector and classifier output for one video frame.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub observations: Vec<KeypointObservation>,
    #[serde(default)]
    pub prediction: Option<ActionPrediction>,
    /// Frames the prediction spans.
    #[serde(default)]
    pub frame_count: Option<u64>,
}

/// Iterates over the frames of a replay, skipping blank lines.
pub struct FrameReader<R> {
    lines: std::iter::Enumerate<std::io::Lines<R>>,
}

impl FrameReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::OpenReplayFile(e, path.to_path_buf()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines().enumerate(),
        }
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<Frame, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, line) = self.lines.next()?;
            let line_number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::ReadFrame(e, line_number))),
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(
                serde_json::from_str(&line).map_err(|e| Error::ParseFrame(e, line_number)),
            );
        }
    }
}
