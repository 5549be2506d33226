pub mod debounce;
pub mod frame;
pub mod playback;

pub use debounce::*;
pub use frame::*;
pub use playback::*;
