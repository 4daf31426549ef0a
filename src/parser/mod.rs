pub mod document;
pub mod timestamp;

pub use document::*;
pub use timestamp::*;
