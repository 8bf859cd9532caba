use crate::prelude::*;

use std::time::Duration;

/// How the player drives the camera
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keyboard plus captured pointer
    #[default]
    Desktop,
    /// Virtual joystick plus swipe look
    Touch,
}

impl InputMode {
    /// `WISER_INPUT=touch` selects touch controls, anything else keeps the desktop scheme
    pub fn from_env() -> Self {
        match std::env::var("WISER_INPUT") {
            Ok(value) if value.eq_ignore_ascii_case("touch") => InputMode::Touch,
            _ => InputMode::Desktop,
        }
    }
}

/// Constants used to keep the camera on the walkable floor
#[derive(Resource, Clone, Debug)]
pub struct GroundingSettings {
    /// Camera height above the floor
    pub eye_height: f32,
    /// Tallest floor change accepted in one move
    pub step_limit: f32,
    /// Maximum length of a downward ground probe
    pub max_ray_distance: f32,
    /// Idle probes start this far above the eye
    pub idle_probe_offset: f32,
    /// Exponential follow rate for the camera height, per second
    pub follow_rate: f32,
    /// Scene group ray casts are scoped to when it exists
    pub walkable_group: String,
    /// Joystick magnitudes at or below this are ignored
    pub touch_dead_zone: f32,
}

impl Default for GroundingSettings {
    fn default() -> Self {
        Self {
            eye_height: 1.7,
            step_limit: 1.5,
            max_ray_distance: 100.0,
            idle_probe_offset: 1.0,
            follow_rate: 20.0,
            walkable_group: String::from("apartment-model"),
            touch_dead_zone: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PoseTarget {
    pub position: Point3<f32>,
    pub duration: f32,
    pub ease: Ease,
}

/// Camera poses and timings for the phase transitions
#[derive(Resource, Clone, Debug)]
pub struct TransitionSettings {
    pub initial_position: Point3<f32>,
    /// Where the orbiting overview settles when entering setup
    pub overview: PoseTarget,
    /// First-person spawn point reached when entering explore
    pub spawn: PoseTarget,
    /// Point the camera stays aimed at during the fly-in
    pub spawn_look_at: Point3<f32>,
    /// Where the orbit rig's target settles when entering setup
    pub orbit_target: Point3<f32>,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            initial_position: Point3::new(30.0, 25.0, 40.0),
            overview: PoseTarget {
                position: Point3::new(25.0, 20.0, 35.0),
                duration: 3.0,
                ease: Ease::Power3InOut,
            },
            spawn: PoseTarget {
                position: Point3::new(-12.0, 1.7, 30.0),
                duration: 2.5,
                ease: Ease::Power2InOut,
            },
            spawn_look_at: Point3::new(5.0, 2.0, 0.0),
            orbit_target: Point3::origin(),
        }
    }
}

#[derive(Resource, Clone, Copy, Debug)]
pub struct ProximitySettings {
    pub radius: f32,
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self { radius: 3.0 }
    }
}

#[derive(Resource, Clone, Copy, Debug)]
pub struct PointerLockSettings {
    /// Delay before re-capturing the pointer once no marker is active
    pub relock_delay: Duration,
}

impl Default for PointerLockSettings {
    fn default() -> Self {
        Self {
            relock_delay: Duration::from_millis(300),
        }
    }
}

#[derive(Resource, Clone, Copy, Debug)]
pub struct TouchSettings {
    /// Maximum joystick knob travel in pixels
    pub joystick_radius: f32,
    /// Radians of look per pixel swiped
    pub look_sensitivity: f32,
}

impl Default for TouchSettings {
    fn default() -> Self {
        Self {
            joystick_radius: 42.0,
            look_sensitivity: 0.003,
        }
    }
}

