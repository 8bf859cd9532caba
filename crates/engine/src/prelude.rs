pub use crate::components::*;
pub use crate::input::*;
pub use crate::layers::*;
pub use crate::{Layer, LayerContext, LayerEvent};

pub use bevy_ecs::prelude::*;
pub use nalgebra::{Point3, UnitQuaternion, Vector3};
pub use winit::event::{MouseButton, TouchPhase};
pub use winit::keyboard::KeyCode;
