pub mod bounds;
pub mod year;

// Foundation crate: small, well-tested primitives only.
pub use bounds::*;
pub use year::*;
