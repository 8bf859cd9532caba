use crate::prelude::*;

use std::f32::consts::FRAC_PI_2;

/// First-person walk + look tuning for the camera entity
#[derive(Component, Clone, Debug)]
pub struct CameraController {
    /// Desktop movement speed in units per second
    pub walk_speed: f32,
    /// Desktop speed while a sprint key is held
    pub sprint_speed: f32,
    /// Joystick movement speed, touch has no sprint
    pub touch_speed: f32,
    /// Pointer look sensitivity (radians per pixel)
    pub look_sensitivity: f32,
    pub pointer_pitch_limit: f32,
    pub touch_pitch_limit: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            walk_speed: 10.0,
            sprint_speed: 16.0,
            touch_speed: 8.0,
            look_sensitivity: 0.002,
            // Exactly vertical would lose the heading
            pointer_pitch_limit: FRAC_PI_2 - 0.01,
            touch_pitch_limit: std::f32::consts::PI / 2.5,
        }
    }
}

impl CameraController {
    pub fn speed(&self, mode: InputMode, sprint: bool) -> f32 {
        match mode {
            InputMode::Touch => self.touch_speed,
            InputMode::Desktop if sprint => self.sprint_speed,
            InputMode::Desktop => self.walk_speed,
        }
    }
}
