pub mod cutoff;
pub mod dataset;
pub mod grouping;
pub mod lines;

pub use cutoff::*;
pub use dataset::*;
pub use grouping::*;
pub use lines::*;
