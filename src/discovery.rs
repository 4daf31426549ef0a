//! Input discovery
//!
//! Only files directly inside the chosen directory are considered. Anything we
//! produced on an earlier run carries the output marker in its name and is left
//! alone.

use crate::error::{MergeError, Result};
use crate::types::OUTPUT_MARKER;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Extension of candidate track files
pub const TRACK_EXTENSION: &str = "gpx";

/// Whether a file name marks a previously generated output file
pub fn is_generated_output(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.contains(OUTPUT_MARKER))
        .unwrap_or(false)
}

/// List the `*.gpx` files directly inside `dir`, skipping generated output.
///
/// An empty result means there is nothing to merge; the caller decides how to
/// report that.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MergeError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let escaped = Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/*.{}", escaped.trim_end_matches('/'), TRACK_EXTENSION);
    tracing::debug!(%pattern, "discovering track files");

    let mut paths = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if is_generated_output(&path) {
            tracing::debug!(path = %path.display(), "skipping generated output");
            continue;
        }
        paths.push(path);
    }

    tracing::debug!(count = paths.len(), "discovered track files");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_filters_extension_and_output_marker() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path();
        fs::write(dir.join("2013-05-01-run.gpx"), "<gpx/>").unwrap();
        fs::write(dir.join("2013-05-02-ride.gpx"), "<gpx/>").unwrap();
        fs::write(dir.join("endomondo_001.gpx"), "<gpx/>").unwrap();
        fs::write(dir.join("notes.txt"), "hello").unwrap();
        fs::create_dir(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("deep.gpx"), "<gpx/>").unwrap();

        let mut names: Vec<String> = discover(dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["2013-05-01-run.gpx", "2013-05-02-ride.gpx"]);
    }

    #[test]
    fn test_discover_ignores_directories_with_gpx_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("folder.gpx")).unwrap();
        assert!(discover(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_handles_glob_characters_in_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().join("exports [2013]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("run.gpx"), "<gpx/>").unwrap();
        assert_eq!(discover(&dir).unwrap().len(), 1);
    }

    #[test]
    fn test_output_marker_only_checked_on_file_name() {
        assert!(is_generated_output(Path::new("/data/endomondo_002.gpx")));
        assert!(!is_generated_output(Path::new("/data/endomondo/run.gpx")));
    }

    #[test]
    fn test_discover_missing_directory_is_io_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        assert!(matches!(discover(&missing), Err(MergeError::Io { .. })));
    }
}
