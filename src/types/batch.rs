use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Prefix shared by every generated file. Inputs whose name contains it are
/// never read back in, so repeated runs do not ingest their own output.
pub const OUTPUT_MARKER: &str = "endomondo";

/// Approximate upload limit of the target service, in bytes
pub const MAX_OUTPUT_BYTES: usize = 10_000_000;

/// Room reserved for the closing markup when checking a batch against the ceiling
pub const CLOSING_ALLOWANCE: usize = 20;

/// Closing marker of a GPX document
pub const GPX_CLOSING_TAG: &str = "</gpx>";

/// Name of the output file for a 1-based sequence number, e.g. `endomondo_001.gpx`
pub fn output_file_name(sequence: u32) -> String {
    format!("{}_{:03}.gpx", OUTPUT_MARKER, sequence)
}

/// Accumulated text of one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputBatch {
    pub sequence: u32,
    pub content: String,
    /// Number of track files whose body went into this batch
    pub track_count: usize,
}

impl OutputBatch {
    /// Start a batch with the structural header of its first document
    pub fn new(sequence: u32, header: &str) -> Self {
        Self {
            sequence,
            content: header.to_string(),
            track_count: 0,
        }
    }

    /// Current length in bytes, the value checked against the ceiling
    pub fn byte_len(&self) -> usize {
        self.content.len()
    }

    /// Whether appending `body` would push this batch over `max_bytes`
    pub fn would_overflow(&self, body: &str, max_bytes: usize) -> bool {
        self.byte_len() + body.len() + CLOSING_ALLOWANCE > max_bytes
    }

    pub fn push_body(&mut self, body: &str) {
        self.content.push_str(body);
        self.track_count += 1;
    }

    /// Append the closing document marker; the batch is complete afterwards
    pub fn close(mut self) -> Self {
        self.content.push_str(GPX_CLOSING_TAG);
        self
    }

    pub fn file_name(&self) -> String {
        output_file_name(self.sequence)
    }
}

/// Outcome of a full merge run, handed back to the front end
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeReport {
    /// Written files in sequence order
    pub output_files: Vec<PathBuf>,
    /// Number of track files that contributed content
    pub merged: usize,
    /// Files excluded because they carry no recorded track time
    pub skipped: Vec<PathBuf>,
}

impl MergeReport {
    pub fn first_output(&self) -> Option<&PathBuf> {
        self.output_files.first()
    }

    pub fn last_output(&self) -> Option<&PathBuf> {
        self.output_files.last()
    }
}
