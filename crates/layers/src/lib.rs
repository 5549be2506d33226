pub mod canvas;
pub mod overlay;
pub mod symbology;

pub use canvas::*;
pub use overlay::*;
pub use symbology::*;
