//! Scroll and pointer state for page animations.

mod observe;
mod reveal;
mod throttle;

pub use observe::*;
pub use reveal::*;
pub use throttle::*;
