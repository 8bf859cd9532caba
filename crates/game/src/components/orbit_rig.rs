use crate::prelude::*;

use std::f32::consts::{PI, TAU};

/// Presentation camera orbit used while in setup
#[derive(Component, Clone, Debug)]
pub struct OrbitRig {
    /// Point the camera orbits and looks at
    pub target: Point3<f32>,
    /// 2.0 is one revolution every 30 seconds
    pub auto_rotate_speed: f32,
    /// Largest angle from straight up the camera may reach
    pub max_polar_angle: f32,
}

impl OrbitRig {
    pub fn new(target: Point3<f32>) -> Self {
        Self {
            target,
            auto_rotate_speed: 2.0,
            max_polar_angle: PI / 2.1,
        }
    }

    /// Camera position after auto-rotating around the target for `dt` seconds
    pub fn orbit(&self, position: &Point3<f32>, dt: f32) -> Point3<f32> {
        let offset = position - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return *position;
        }

        let angle = TAU / 60.0 * self.auto_rotate_speed * dt;
        let theta = offset.x.atan2(offset.z) - angle;
        let phi = (offset.y / radius)
            .clamp(-1.0, 1.0)
            .acos()
            .clamp(1e-6, self.max_polar_angle);

        self.target
            + Vector3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            )
    }
}
