mod easing;
mod orientation;
mod raycast;

pub use easing::*;
pub use orientation::*;
pub use raycast::*;
