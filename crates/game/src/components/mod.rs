mod camera_controller;
mod marker;
mod orbit_rig;
mod pendant_light;

pub use camera_controller::*;
pub use marker::*;
pub use orbit_rig::*;
pub use pendant_light::*;
