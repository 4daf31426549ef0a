//! Track start time extraction
//!
//! RunKeeper writes `2013-05-01T10:00:00Z`. Sports Tracker appends fractional
//! seconds, and at least two variants of that have been seen in exported files.
//! The formats are tried in a fixed order; the first one that parses wins.

use crate::error::{MergeError, Result};
use crate::parser::document::GpxDocument;
use crate::types::TrackTimestamp;
use chrono::NaiveDateTime;

/// Standard GPX time, exact seconds, UTC marker
pub const GPX_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Sports Tracker time with the fractional part cut off
pub const SPORTS_TRACKER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Result of one parse policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseAttempt {
    Parsed(TrackTimestamp),
    TryNext,
}

/// What a document contributes to the merge ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampOutcome {
    Found(TrackTimestamp),
    /// No track or no recorded time, e.g. a manually entered workout
    Excluded,
}

type TimePolicy = fn(&str) -> ParseAttempt;

const TIME_POLICIES: [(&str, TimePolicy); 3] = [
    ("gpx", parse_gpx_time),
    ("sports-tracker", parse_before_fraction),
    ("sports-tracker-short", parse_up_to_fraction),
];

fn attempt(value: &str, format: &str) -> ParseAttempt {
    match NaiveDateTime::parse_from_str(value, format) {
        Ok(dt) => ParseAttempt::Parsed(TrackTimestamp(dt)),
        Err(_) => ParseAttempt::TryNext,
    }
}

fn parse_gpx_time(value: &str) -> ParseAttempt {
    attempt(value, GPX_TIME_FORMAT)
}

/// Where the fractional part starts: the first `.`, or the last character
/// when there is none (plain `2013-05-01T10:00:00` then loses its final digit,
/// which `%S` still accepts)
fn fraction_start(value: &str) -> Option<usize> {
    value.find('.').or_else(|| value.len().checked_sub(1))
}

fn attempt_prefix(value: &str, end: Option<usize>) -> ParseAttempt {
    match end.and_then(|end| value.get(..end)) {
        Some(part) => attempt(part, SPORTS_TRACKER_TIME_FORMAT),
        None => ParseAttempt::TryNext,
    }
}

/// Everything up to one character before the fraction
fn parse_before_fraction(value: &str) -> ParseAttempt {
    attempt_prefix(value, fraction_start(value).and_then(|i| i.checked_sub(1)))
}

/// Everything up to the fraction
fn parse_up_to_fraction(value: &str) -> ParseAttempt {
    attempt_prefix(value, fraction_start(value))
}

/// Parse a raw track time value with the ordered fallback policies
pub fn parse_track_time(value: &str) -> Result<TrackTimestamp> {
    let value = value.trim();
    for (name, policy) in TIME_POLICIES {
        if let ParseAttempt::Parsed(ts) = policy(value) {
            tracing::trace!(policy = name, value, "parsed track time");
            return Ok(ts);
        }
    }

    Err(MergeError::UnrecognizedTimeFormat {
        path: None,
        value: value.to_string(),
    })
}

/// Find the recording start time of the first track in a GPX text
pub fn extract_timestamp(raw: &str) -> Result<TimestampOutcome> {
    let doc = GpxDocument::parse(raw)?;
    timestamp_of(&doc)
}

pub(crate) fn timestamp_of(doc: &GpxDocument<'_>) -> Result<TimestampOutcome> {
    match doc.first_track_time() {
        Some(value) => Ok(TimestampOutcome::Found(parse_track_time(value)?)),
        None => Ok(TimestampOutcome::Excluded),
    }
}
