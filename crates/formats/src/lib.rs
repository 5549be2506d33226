pub mod error;
pub mod geometry;
pub mod sparql;
pub mod street;

pub use error::*;
pub use geometry::*;
pub use sparql::*;
pub use street::*;
