use std::fmt;
use std::path::{Path, PathBuf};

/// ` in <path>` suffix for errors that know their file
struct InFile<'a>(&'a Option<PathBuf>);

impl fmt::Display for InFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(path) => write!(f, " in {}", path.display()),
            None => Ok(()),
        }
    }
}

/// Error types for GPX discovery, parsing and merging
#[derive(Debug)]
pub enum MergeError {
    /// I/O errors, with the file or directory involved
    Io { path: PathBuf, source: std::io::Error },
    /// The discovery glob pattern could not be built
    InvalidPattern(String),
    /// The file could not be parsed as a GPX document
    MalformedDocument {
        path: Option<PathBuf>,
        reason: String,
    },
    /// A track start time is present but matches none of the known formats
    UnrecognizedTimeFormat {
        path: Option<PathBuf>,
        value: String,
    },
    /// No input file carried a usable track start time
    EmptyInputSet,
}

impl MergeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Parse failure not yet tied to a file; see [`MergeError::with_path`]
    pub fn malformed(reason: impl Into<String>) -> Self {
        MergeError::MalformedDocument {
            path: None,
            reason: reason.into(),
        }
    }

    /// Attach a file path to document errors raised from in-memory text
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            MergeError::MalformedDocument { path: None, reason } => {
                MergeError::MalformedDocument {
                    path: Some(path.to_path_buf()),
                    reason,
                }
            }
            MergeError::UnrecognizedTimeFormat { path: None, value } => {
                MergeError::UnrecognizedTimeFormat {
                    path: Some(path.to_path_buf()),
                    value,
                }
            }
            other => other,
        }
    }
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            MergeError::InvalidPattern(msg) => write!(f, "Invalid file pattern: {}", msg),
            MergeError::MalformedDocument { path, reason } => {
                write!(f, "Malformed GPX document{}: {}", InFile(path), reason)
            }
            MergeError::UnrecognizedTimeFormat { path, value } => write!(
                f,
                "Unrecognized track start time {:?}{}",
                value,
                InFile(path)
            ),
            MergeError::EmptyInputSet => write!(f, "No usable track files found"),
        }
    }
}

impl std::error::Error for MergeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MergeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<glob::PatternError> for MergeError {
    fn from(err: glob::PatternError) -> Self {
        MergeError::InvalidPattern(err.to_string())
    }
}

impl From<glob::GlobError> for MergeError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        MergeError::io(path, err.into())
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
