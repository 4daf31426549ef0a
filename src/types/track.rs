use crate::parser::DocumentLayout;
use chrono::NaiveDateTime;
use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recording start time of one activity, taken from its first track point
///
/// Source files carry no reliable zone information (one of the accepted formats
/// drops the `Z` marker), so the value is kept naive and only used for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackTimestamp(pub NaiveDateTime);

impl From<NaiveDateTime> for TrackTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for TrackTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// One input GPX file that has a usable start time
#[derive(Debug, Clone)]
pub struct TrackFile {
    pub path: PathBuf,
    pub start_time: TrackTimestamp,
    pub content: String,
    pub layout: DocumentLayout,
}

impl TrackFile {
    pub fn new(
        path: PathBuf,
        start_time: TrackTimestamp,
        content: String,
        layout: DocumentLayout,
    ) -> Self {
        Self {
            path,
            start_time,
            content,
            layout,
        }
    }

    /// Everything before the first track element
    pub fn header(&self) -> &str {
        self.layout.header(&self.content)
    }

    /// Track elements without the closing `</gpx>`
    pub fn body(&self) -> &str {
        self.layout.body(&self.content)
    }

    /// File name for progress output
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
    }
}
