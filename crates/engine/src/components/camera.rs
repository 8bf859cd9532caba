use crate::prelude::*;

#[derive(Component, Clone, Debug)]
pub struct Camera {
    /// Point the camera looks at
    pub target: Point3<f32>,
    /// Distance to the plane kept in focus
    pub focus_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Point3::origin(),
            focus_distance: 10.0,
        }
    }
}

impl Camera {
    /// Keep the look-at target in front of the camera after it was rotated directly
    pub fn aim_along(&mut self, transform: &Transform) {
        self.target = transform.position + transform.forward() * self.focus_distance.max(1.0);
    }
}
