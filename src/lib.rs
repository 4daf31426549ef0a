//! GPX Join Library
//!
//! Joins the individual GPX files exported from one fitness-tracking service
//! (RunKeeper, Sports Tracker) into a few larger files that fit the upload limit
//! of another (Endomondo, 10 MB), keeping activities in chronological order.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization of the report and timestamp types
//! - **`json`**: Let the CLI print the merge report as JSON
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gpx_join::{merge_directory, MergeEvent, MergeOptions};
//!
//! let options = MergeOptions::new("exports");
//! let report = merge_directory(&options, |event| {
//!     if let MergeEvent::Reading(path) = event {
//!         println!("Processing: {}", path.display());
//!     }
//! })
//! .unwrap();
//! println!("Merged {} tracks into {} files", report.merged, report.output_files.len());
//! ```
//!
//! The individual steps are public as well:
//! [`discover`], [`load_track_file`] / [`extract_timestamp`], [`sort_by_time`],
//! [`concatenate`] and [`write_batch`].

pub mod discovery;
pub mod error;
pub mod merge;
pub mod options;
pub mod parser;
pub mod types;

pub use discovery::*;
pub use error::*;
pub use merge::*;
pub use options::*;
pub use parser::*;
pub use types::*;
