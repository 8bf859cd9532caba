use crate::prelude::*;

/// Position, orientation and scale of an entity in world space.
///
/// Cameras follow the right-handed, -Z forward convention.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Point3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn from_position(position: Point3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// Direction the entity faces
    pub fn forward(&self) -> Vector3<f32> {
        self.rotation * -Vector3::z()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.rotation * Vector3::x()
    }

    /// Rotate so that the entity faces `target`, keeping world up as up.
    /// Does nothing when `target` coincides with the position.
    pub fn look_at(&mut self, target: &Point3<f32>) {
        let direction = target - self.position;
        if direction.norm_squared() <= f32::EPSILON {
            return;
        }
        // Straight up or down has no yaw; borrow one from the current heading
        let up = if direction.cross(&Vector3::y()).norm_squared() <= f32::EPSILON {
            self.rotation * -Vector3::z()
        } else {
            Vector3::y()
        };
        // face_towards points +Z at the target; cameras look down -Z
        self.rotation = UnitQuaternion::face_towards(&-direction, &up);
    }

    /// Map a point from local space into world space
    pub fn transform_point(&self, local: &Point3<f32>) -> Point3<f32> {
        self.position + self.rotation * local.coords.component_mul(&self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_at_faces_target() {
        let mut transform = Transform::from_position(Point3::new(0.0, 0.0, 10.0));
        transform.look_at(&Point3::origin());

        let forward = transform.forward();
        assert!((forward - Vector3::new(0.0, 0.0, -1.0)).norm() < 1e-5);
        assert!((transform.right() - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_look_at_same_point_keeps_rotation() {
        let mut transform = Transform::from_position(Point3::new(1.0, 2.0, 3.0));
        let before = transform.rotation;
        transform.look_at(&Point3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.rotation, before);
    }

    #[test]
    fn test_transform_point_applies_scale_then_translation() {
        let transform = Transform::from_position(Point3::new(1.0, 0.0, 0.0))
            .with_scale(Vector3::new(2.0, 1.0, 1.0));
        let world = transform.transform_point(&Point3::new(1.0, 1.0, 0.0));
        assert!((world - Point3::new(3.0, 1.0, 0.0)).norm() < 1e-6);
    }
}
