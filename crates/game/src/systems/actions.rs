use crate::prelude::*;

/// Start, light toggle and pointer capture requests.
/// Keys stand in for the overlay and phone buttons.
pub fn handle_actions(
    input: Res<InputState>,
    mut coordinator: ResMut<PhaseCoordinator>,
    active: Res<ActiveMarker>,
    mut lights: ResMut<LightState>,
    mut arbiter: ResMut<PointerLockArbiter>,
    mut events: ResMut<EventQueue>,
) {
    match coordinator.phase() {
        Phase::Setup => {
            let tapped = input
                .touches
                .iter()
                .any(|touch| touch.phase == TouchPhase::Ended);
            if input.is_key_just_pressed(KeyCode::Enter)
                || input.is_button_just_pressed(MouseButton::Left)
                || tapped
            {
                coordinator.start_experience();
            }
        }
        Phase::Explore => {
            if input.is_key_just_pressed(KeyCode::KeyE) {
                match active.id() {
                    Some(id) => {
                        let on = lights.toggle_light(id);
                        log::info!("Light {} switched {}", id, if on { "on" } else { "off" });
                        events.push(WalkthroughEvent::ToggleLight {
                            id: id.to_string(),
                            on,
                        });
                    }
                    None => log::debug!("No marker nearby, nothing to toggle"),
                }
            }

            if input.is_key_just_pressed(KeyCode::Escape) {
                arbiter.release();
            } else if input.is_button_just_pressed(MouseButton::Left) {
                arbiter.request_lock();
            }
        }
    }
}
