use crate::prelude::*;

/// Yaw (about world Y) and pitch (about the camera's X) of a rotation, in the
/// Y-then-X order used by first-person cameras
pub fn yaw_pitch(rotation: &UnitQuaternion<f32>) -> (f32, f32) {
    let forward = rotation * -Vector3::z();
    let pitch = forward.y.clamp(-1.0, 1.0).asin();
    let horizontal = (forward.x * forward.x + forward.z * forward.z).sqrt();
    let yaw = if horizontal > 1e-6 {
        (-forward.x).atan2(-forward.z)
    } else {
        // Looking straight up or down; the camera's right vector still knows the heading
        let right = rotation * Vector3::x();
        (-right.z).atan2(right.x)
    };
    (yaw, pitch)
}

pub fn rotation_from_yaw_pitch(yaw: f32, pitch: f32) -> UnitQuaternion<f32> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch)
}

/// Apply a look delta (radians, screen-space x/y) with the pitch clamped to `pitch_limit`
pub fn apply_look(rotation: &UnitQuaternion<f32>, dx: f32, dy: f32, pitch_limit: f32) -> UnitQuaternion<f32> {
    let (yaw, pitch) = yaw_pitch(rotation);
    let yaw = yaw - dx;
    let pitch = (pitch - dy).clamp(-pitch_limit, pitch_limit);
    rotation_from_yaw_pitch(yaw, pitch)
}

/// Camera-relative forward and right, flattened onto the horizontal plane
pub fn horizontal_basis(rotation: &UnitQuaternion<f32>) -> (Vector3<f32>, Vector3<f32>) {
    let mut right = rotation * Vector3::x();
    right.y = 0.0;
    let right = right.try_normalize(1e-6).unwrap_or_else(Vector3::x);

    let mut forward = rotation * -Vector3::z();
    forward.y = 0.0;
    let forward = forward
        .try_normalize(1e-6)
        .unwrap_or_else(|| Vector3::y().cross(&right));

    (forward, right)
}
