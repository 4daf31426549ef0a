pub mod batch;
pub mod track;

pub use batch::*;
pub use track::*;
