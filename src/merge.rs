//! Ordering and concatenation of track files
//!
//! Each output file is a complete GPX document: the structural header of the
//! first track file in the batch, the track bodies of every file in the batch in
//! start-time order, and one closing `</gpx>`. A new output file is started
//! before a body would push the current one over the size ceiling.

use crate::discovery::discover;
use crate::error::{MergeError, Result};
use crate::options::MergeOptions;
use crate::parser::timestamp::timestamp_of;
use crate::parser::{GpxDocument, TimestampOutcome};
use crate::types::{MergeReport, OutputBatch, TrackFile};
use std::fs;
use std::path::{Path, PathBuf};

/// Progress notifications emitted by [`merge_directory`]
#[derive(Debug, Clone, Copy)]
pub enum MergeEvent<'a> {
    /// About to read an input file
    Reading(&'a Path),
    /// Input file has no recorded track time and is left out
    Skipped(&'a Path),
    /// An output file was written
    Written { path: &'a Path, tracks: usize },
}

/// Read one input file.
///
/// Returns `Ok(None)` when the file has no track or no recorded time, which is
/// normal for manually entered workouts.
pub fn load_track_file(path: &Path) -> Result<Option<TrackFile>> {
    let content = fs::read_to_string(path).map_err(|e| MergeError::io(path, e))?;

    let (start_time, layout) = {
        let doc = GpxDocument::parse(&content).map_err(|e| e.with_path(path))?;
        let start_time = match timestamp_of(&doc).map_err(|e| e.with_path(path))? {
            TimestampOutcome::Found(ts) => ts,
            TimestampOutcome::Excluded => return Ok(None),
        };
        let layout = doc
            .layout()
            .ok_or_else(|| MergeError::malformed("document has no track element").with_path(path))?;
        (start_time, layout)
    };

    tracing::debug!(path = %path.display(), %start_time, bytes = content.len(), "loaded track file");
    Ok(Some(TrackFile::new(
        path.to_path_buf(),
        start_time,
        content,
        layout,
    )))
}

/// Stable sort by start time; files with equal times keep discovery order
pub fn sort_by_time(files: &mut [TrackFile]) {
    files.sort_by_key(|f| f.start_time);
}

/// Build the output batches for `files`, which must already be sorted.
///
/// When a body does not fit, the new batch starts with the header of the file
/// that did not fit, followed by that file's body.
pub fn concatenate(files: &[TrackFile], max_bytes: usize) -> Result<Vec<OutputBatch>> {
    let (first, rest) = files.split_first().ok_or(MergeError::EmptyInputSet)?;

    let mut batches = Vec::new();
    let mut batch = OutputBatch::new(1, first.header());
    batch.push_body(first.body());

    for file in rest {
        let body = file.body();
        if batch.would_overflow(body, max_bytes) {
            tracing::debug!(
                sequence = batch.sequence,
                bytes = batch.byte_len(),
                next = file.file_name(),
                "output file full, starting a new one"
            );
            let next = OutputBatch::new(batch.sequence + 1, file.header());
            batches.push(std::mem::replace(&mut batch, next).close());
        }
        batch.push_body(body);
    }

    batches.push(batch.close());
    Ok(batches)
}

/// Write one closed batch into `output_dir`, creating the directory if needed
pub fn write_batch(batch: &OutputBatch, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| MergeError::io(output_dir, e))?;

    let path = output_dir.join(batch.file_name());
    fs::write(&path, &batch.content).map_err(|e| MergeError::io(&path, e))?;
    tracing::debug!(path = %path.display(), bytes = batch.byte_len(), "wrote output file");
    Ok(path)
}

/// Discover, order and merge every track file in `options.input_dir`
pub fn merge_directory<F>(options: &MergeOptions, mut progress: F) -> Result<MergeReport>
where
    F: FnMut(MergeEvent<'_>),
{
    let paths = discover(&options.input_dir)?;

    let mut report = MergeReport::default();
    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        progress(MergeEvent::Reading(path));
        match load_track_file(path)? {
            Some(file) => files.push(file),
            None => {
                progress(MergeEvent::Skipped(path));
                report.skipped.push(path.clone());
            }
        }
    }

    sort_by_time(&mut files);
    let batches = concatenate(&files, options.max_output_bytes)?;

    let output_dir = options.resolved_output_dir();
    for batch in &batches {
        let path = write_batch(batch, output_dir)?;
        progress(MergeEvent::Written {
            path: &path,
            tracks: batch.track_count,
        });
        report.output_files.push(path);
    }

    report.merged = files.len();
    Ok(report)
}
