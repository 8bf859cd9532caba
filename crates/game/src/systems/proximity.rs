use crate::prelude::*;

/// Edge-triggered enter/exit of the camera against every marker radius.
///
/// Overlapping radii are not arbitrated: the latest enter or exit decides the
/// active marker.
pub fn detect_proximity(
    coordinator: Res<PhaseCoordinator>,
    cameras: Query<&Transform, With<CameraController>>,
    mut markers: Query<&mut Marker>,
    mut active: ResMut<ActiveMarker>,
    mut events: ResMut<EventQueue>,
) {
    if !coordinator.is_exploring() {
        // Markers are only live while exploring
        for mut marker in markers.iter_mut() {
            if marker.inside && marker.leave() {
                exit(&marker.id, &mut active, &mut events);
            }
        }
        return;
    }

    let Ok(camera) = cameras.single() else {
        return;
    };

    for mut marker in markers.iter_mut() {
        match marker.update(&camera.position) {
            Some(Crossing::Enter) => {
                log::info!("Entered marker {}", marker.id);
                active.0 = Some(marker.id.clone());
                events.push(WalkthroughEvent::ProximityEnter(marker.id.clone()));
            }
            Some(Crossing::Exit) => exit(&marker.id, &mut active, &mut events),
            None => {}
        }
    }
}

fn exit(id: &str, active: &mut ActiveMarker, events: &mut EventQueue) {
    log::info!("Left marker {}", id);
    active.0 = None;
    events.push(WalkthroughEvent::ProximityExit(id.to_string()));
}
