use crate::prelude::*;
use crate::systems::*;

use bevy_ecs::schedule::Schedule;
use std::time::Duration;

/// Frames longer than this (window drags, breakpoints) are simulated as this long
const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

pub struct WalkthroughLayer {
    schedule: Schedule,
}

impl WalkthroughLayer {
    pub fn new(context: &LayerContext) -> Self {
        {
            let mut world = context.world.lock().unwrap_or_else(|p| p.into_inner());
            init_resources(&mut world);
        }

        Self {
            schedule: walkthrough_schedule(),
        }
    }
}

/// Insert every walkthrough resource that was not configured up front
pub fn init_resources(world: &mut World) {
    world.init_resource::<InputMode>();
    world.init_resource::<GroundingSettings>();
    world.init_resource::<TransitionSettings>();
    world.init_resource::<ProximitySettings>();
    world.init_resource::<PointerLockSettings>();
    world.init_resource::<TouchSettings>();

    world.init_resource::<PhaseCoordinator>();
    world.init_resource::<CameraTransition>();
    world.init_resource::<InputIntent>();
    world.init_resource::<TouchControls>();
    world.init_resource::<LightState>();
    world.init_resource::<ActiveMarker>();
    world.init_resource::<EventQueue>();

    if !world.contains_resource::<PointerLockArbiter>() {
        let relock_delay = world
            .get_resource::<PointerLockSettings>()
            .map(|settings| settings.relock_delay)
            .unwrap_or_default();
        world.insert_resource(PointerLockArbiter::new(relock_delay));
    }
}

/// One frame of the walkthrough, in pipeline order
pub fn walkthrough_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            handle_actions,
            sample_desktop_input.run_if(resource_equals(InputMode::Desktop)),
            sample_touch_input.run_if(resource_equals(InputMode::Touch)),
            start_phase_transitions,
            advance_camera_transition,
            apply_pointer_look.run_if(resource_equals(InputMode::Desktop)),
            move_camera,
            orbit_camera,
            detect_proximity,
            arbitrate_pointer_lock.run_if(resource_equals(InputMode::Desktop)),
            fade_pendant_lights,
            update_clear_color,
        )
            .chain(),
    );
    schedule
}

impl Layer for WalkthroughLayer {
    fn frame(&mut self, context: &LayerContext) -> std::result::Result<(), wgpu::SurfaceError> {
        let mut world = context.world.lock().unwrap_or_else(|p| p.into_inner());
        world.insert_resource(Time(context.delta_time.min(MAX_FRAME_TIME)));

        self.schedule.run(&mut world);

        if let Some(mut events) = world.get_resource_mut::<EventQueue>() {
            for event in events.drain() {
                log::debug!("Walkthrough event {:?}", event);
            }
        }

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}
