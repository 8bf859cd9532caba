use crate::prelude::*;

const FORWARD_KEYS: &[KeyCode] = &[KeyCode::ArrowUp, KeyCode::KeyW];
const BACKWARD_KEYS: &[KeyCode] = &[KeyCode::ArrowDown, KeyCode::KeyS];
const LEFT_KEYS: &[KeyCode] = &[KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT_KEYS: &[KeyCode] = &[KeyCode::ArrowRight, KeyCode::KeyD];
const SPRINT_KEYS: &[KeyCode] = &[KeyCode::ShiftLeft, KeyCode::ShiftRight];

/// Keyboard to movement intent. Pointer look bypasses the intent.
pub fn sample_desktop_input(input: Res<InputState>, mut intent: ResMut<InputIntent>) {
    let axis = |positive: &[KeyCode], negative: &[KeyCode]| {
        let positive = if input.any_key_pressed(positive) { 1.0 } else { 0.0 };
        let negative = if input.any_key_pressed(negative) { 1.0 } else { 0.0 };
        positive - negative
    };

    intent.move_forward = axis(FORWARD_KEYS, BACKWARD_KEYS);
    intent.move_strafe = axis(RIGHT_KEYS, LEFT_KEYS);
    intent.sprint = input.any_key_pressed(SPRINT_KEYS);
}

/// Feed this frame's touch events through the joystick and swipe controls
pub fn sample_touch_input(
    input: Res<InputState>,
    coordinator: Res<PhaseCoordinator>,
    window: Option<Res<WindowSize>>,
    settings: Res<TouchSettings>,
    mut controls: ResMut<TouchControls>,
    mut intent: ResMut<InputIntent>,
) {
    if !coordinator.is_exploring() {
        if controls.is_tracking() {
            controls.release_all(&mut intent);
        }
        return;
    }

    let Some(window) = window else {
        log::debug!("Window size unknown, dropping touch events");
        return;
    };

    for touch in &input.touches {
        controls.handle(touch, window.width as f32, &settings, &mut intent);
    }
}
