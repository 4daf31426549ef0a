//! Run configuration for a merge

use crate::types::MAX_OUTPUT_BYTES;
use std::path::{Path, PathBuf};

/// Options controlling where input is read from and how output is split
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Directory holding the exported `*.gpx` files
    pub input_dir: PathBuf,
    /// Directory for the merged files (default: same as input)
    pub output_dir: Option<PathBuf>,
    /// Size ceiling per output file in bytes
    pub max_output_bytes: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: None,
            max_output_bytes: MAX_OUTPUT_BYTES,
        }
    }
}

impl MergeOptions {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }

    pub fn resolved_output_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.input_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MergeOptions::default();
        assert_eq!(options.input_dir, PathBuf::from("."));
        assert!(options.output_dir.is_none());
        assert_eq!(options.max_output_bytes, 10_000_000);
    }

    #[test]
    fn test_output_dir_defaults_to_input() {
        let mut options = MergeOptions::new("/tmp/exports");
        assert_eq!(options.resolved_output_dir(), Path::new("/tmp/exports"));

        options.output_dir = Some(PathBuf::from("/tmp/out"));
        assert_eq!(options.resolved_output_dir(), Path::new("/tmp/out"));
    }
}
