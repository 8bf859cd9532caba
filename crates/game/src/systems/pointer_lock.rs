use crate::prelude::*;

/// Drive pointer capture from the arbiter. The window mirrors `mouse_captured`.
pub fn arbitrate_pointer_lock(
    time: Res<Time>,
    coordinator: Res<PhaseCoordinator>,
    active: Res<ActiveMarker>,
    mut arbiter: ResMut<PointerLockArbiter>,
    mut input: ResMut<InputState>,
) {
    // The frame that schedules a relock does not count toward its delay
    if !arbiter.observe(coordinator.is_exploring(), active.id()) {
        arbiter.tick(time.0);
    }

    let locked = arbiter.state() == PointerLock::Locked;
    if input.mouse_captured != locked {
        log::debug!("Pointer lock -> {:?}", arbiter.state());
        input.mouse_captured = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    #[test]
    fn test_capture_follows_marker_with_debounce() {
        let mut world = World::new();
        world.insert_resource(Time(Duration::from_millis(100)));
        world.insert_resource(InputState::new());
        world.init_resource::<PhaseCoordinator>();
        world.init_resource::<ActiveMarker>();
        world.init_resource::<PointerLockArbiter>();
        let mut schedule = Schedule::default();
        schedule.add_systems(arbitrate_pointer_lock);

        world.resource_mut::<PhaseCoordinator>().start_experience();
        // Scheduled on the first frame, then a full 300 ms of frames
        for _ in 0..3 {
            schedule.run(&mut world);
            assert!(!world.resource::<InputState>().mouse_captured);
        }
        schedule.run(&mut world);
        assert!(world.resource::<InputState>().mouse_captured);

        world.resource_mut::<ActiveMarker>().0 = Some("light_main_1".to_string());
        schedule.run(&mut world);
        assert!(!world.resource::<InputState>().mouse_captured);

        // Cleared and set again inside the debounce window
        world.resource_mut::<ActiveMarker>().0 = None;
        schedule.run(&mut world);
        world.resource_mut::<ActiveMarker>().0 = Some("light_main_1".to_string());
        for _ in 0..10 {
            schedule.run(&mut world);
            assert!(!world.resource::<InputState>().mouse_captured);
        }
    }

    #[test]
    fn test_relock_waits_full_delay_after_marker_clears() {
        let mut world = World::new();
        world.insert_resource(Time(Duration::from_millis(100)));
        world.insert_resource(InputState::new());
        world.init_resource::<PhaseCoordinator>();
        world.insert_resource(ActiveMarker(Some("light_main_1".to_string())));
        world.init_resource::<PointerLockArbiter>();
        let mut schedule = Schedule::default();
        schedule.add_systems(arbitrate_pointer_lock);

        world.resource_mut::<PhaseCoordinator>().start_experience();
        schedule.run(&mut world);

        world.resource_mut::<ActiveMarker>().0 = None;
        schedule.run(&mut world);
        schedule.run(&mut world);
        schedule.run(&mut world);
        // 200 ms after the clear is still inside the debounce
        assert!(!world.resource::<InputState>().mouse_captured);
        schedule.run(&mut world);
        assert!(world.resource::<InputState>().mouse_captured);
    }
}
