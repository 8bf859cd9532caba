use crate::prelude::*;

/// Captured pointer motion rotates the camera directly, outside the movement intent
pub fn apply_pointer_look(
    input: Res<InputState>,
    coordinator: Res<PhaseCoordinator>,
    mut cameras: Query<(&mut Transform, &mut Camera, &CameraController)>,
) {
    if !coordinator.movement_allowed() || !input.mouse_captured {
        return;
    }

    let (dx, dy) = input.mouse_delta;
    if dx == 0.0 && dy == 0.0 {
        return;
    }

    for (mut transform, mut camera, controller) in cameras.iter_mut() {
        transform.rotation = apply_look(
            &transform.rotation,
            dx * controller.look_sensitivity,
            dy * controller.look_sensitivity,
            controller.pointer_pitch_limit,
        );
        camera.aim_along(&transform);
    }
}
