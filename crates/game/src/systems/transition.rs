use crate::prelude::*;

/// Turn an observed phase change into a camera tween, cancelling the running one
pub fn start_phase_transitions(
    mut coordinator: ResMut<PhaseCoordinator>,
    mut transition: ResMut<CameraTransition>,
    settings: Res<TransitionSettings>,
    mode: Res<InputMode>,
    cameras: Query<(&Transform, &Camera, Option<&OrbitRig>), With<CameraController>>,
) {
    // The change stays pending until there is a camera to fly
    let Ok((transform, camera, rig)) = cameras.single() else {
        if let Some(phase) = coordinator.pending_phase_change() {
            log::debug!("No camera mounted, holding {:?} transition", phase);
        }
        return;
    };
    let Some(phase) = coordinator.take_phase_change() else {
        return;
    };

    let tween = match phase {
        Phase::Setup => {
            let token = coordinator.begin_transition(false);
            let tween = Tween::new(token, transform.position, &settings.overview);
            match rig {
                Some(rig) => tween.with_orbit_target(rig.target, settings.orbit_target),
                None => {
                    log::debug!("No orbit rig mounted, skipping orbit target animation");
                    tween
                }
            }
        }
        Phase::Explore => {
            let token = coordinator.begin_transition(true);
            let tween = Tween::new(token, transform.position, &settings.spawn)
                .looking_at(settings.spawn_look_at);
            match *mode {
                InputMode::Desktop => {
                    let focus = (settings.spawn_look_at - settings.spawn.position).norm();
                    tween.with_focus_distance(camera.focus_distance, focus)
                }
                InputMode::Touch => tween,
            }
        }
    };

    log::info!(
        "Starting {:?} camera transition {}",
        phase,
        tween.token.generation()
    );
    if let Some(previous) = transition.start(tween) {
        log::debug!("Transition {} cancelled", previous.generation());
    }
}

/// Step the running tween and hand the gate back when it completes
pub fn advance_camera_transition(
    time: Res<Time>,
    mut transition: ResMut<CameraTransition>,
    mut coordinator: ResMut<PhaseCoordinator>,
    mut cameras: Query<
        (&mut Transform, &mut Camera, Option<&mut OrbitRig>),
        With<CameraController>,
    >,
) {
    coordinator.release_pose();
    let CameraTransition::Running(tween) = &mut *transition else {
        return;
    };

    let step = tween.advance(time.delta_secs());
    let token = tween.token;
    let look_at = tween.look_at;

    match cameras.single_mut() {
        Ok((mut transform, mut camera, rig)) => {
            // Movement stays off the pose for the rest of this frame, completion included
            coordinator.claim_pose();
            transform.position = step.position;

            let mut aim = look_at;
            if let Some(mut rig) = rig {
                if let Some(target) = step.orbit_target {
                    rig.target = target;
                }
                aim = aim.or(Some(rig.target));
            }
            if let Some(distance) = step.focus_distance {
                camera.focus_distance = distance;
            }
            // Every step, so the framing holds mid-flight
            if let Some(aim) = aim {
                transform.look_at(&aim);
                camera.target = aim;
            }
        }
        Err(_) => log::debug!("No camera mounted, transition runs without one"),
    }

    if step.finished {
        *transition = CameraTransition::Done;
        if coordinator.finish_transition(token) {
            log::info!("Camera transition {} finished", token.generation());
            if token.gates_movement() {
                log::debug!("Movement released");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    fn world(mode: InputMode) -> World {
        let mut world = World::new();
        world.insert_resource(mode);
        world.insert_resource(Time(Duration::from_millis(100)));
        world.init_resource::<PhaseCoordinator>();
        world.init_resource::<CameraTransition>();
        world.init_resource::<TransitionSettings>();

        let settings = TransitionSettings::default();
        let mut transform = Transform::from_position(settings.initial_position);
        transform.look_at(&Point3::origin());
        world.spawn((
            transform,
            Camera::default(),
            CameraController::default(),
            OrbitRig::new(Point3::new(4.0, 0.0, 0.0)),
        ));
        world
    }

    fn schedule() -> Schedule {
        let mut schedule = Schedule::default();
        schedule.add_systems((start_phase_transitions, advance_camera_transition).chain());
        schedule
    }

    fn camera(world: &mut World) -> (Transform, Camera, OrbitRig) {
        let mut query = world.query::<(&Transform, &Camera, &OrbitRig)>();
        let (transform, camera, rig) = query.single(world).unwrap();
        (*transform, camera.clone(), rig.clone())
    }

    #[test]
    fn test_setup_transition_settles_overview() {
        let mut world = world(InputMode::Desktop);
        let mut schedule = schedule();

        for _ in 0..31 {
            schedule.run(&mut world);
            assert!(!world.resource::<PhaseCoordinator>().is_transitioning());
        }

        let (transform, _, rig) = camera(&mut world);
        let settings = TransitionSettings::default();
        assert!((transform.position - settings.overview.position).norm() < 1e-4);
        assert!((rig.target - Point3::origin()).norm() < 1e-5);
        assert!(matches!(
            *world.resource::<CameraTransition>(),
            CameraTransition::Done
        ));
    }

    #[test]
    fn test_explore_transition_gates_until_done() {
        let mut world = world(InputMode::Desktop);
        let mut schedule = schedule();
        schedule.run(&mut world);

        world.resource_mut::<PhaseCoordinator>().start_experience();
        // 2.5 s at 100 ms per frame
        for _ in 0..24 {
            schedule.run(&mut world);
            assert!(!world.resource::<PhaseCoordinator>().movement_allowed());

            let (transform, _, _) = camera(&mut world);
            let settings = TransitionSettings::default();
            let toward = (settings.spawn_look_at - transform.position).normalize();
            assert!((transform.forward() - toward).norm() < 1e-3);
        }

        schedule.run(&mut world);
        schedule.run(&mut world);
        assert!(world.resource::<PhaseCoordinator>().movement_allowed());

        let (transform, camera, _) = camera(&mut world);
        let settings = TransitionSettings::default();
        assert!((transform.position - settings.spawn.position).norm() < 1e-4);
        let focus = (settings.spawn_look_at - settings.spawn.position).norm();
        assert!((camera.focus_distance - focus).abs() < 1e-3);
    }

    #[test]
    fn test_phase_change_waits_for_camera() {
        let mut world = World::new();
        world.insert_resource(InputMode::Desktop);
        world.insert_resource(Time(Duration::from_millis(100)));
        world.init_resource::<PhaseCoordinator>();
        world.init_resource::<CameraTransition>();
        world.init_resource::<TransitionSettings>();
        let mut schedule = schedule();

        world.resource_mut::<PhaseCoordinator>().start_experience();
        schedule.run(&mut world);
        assert!(!world.resource::<CameraTransition>().is_running());
        assert_eq!(
            world.resource::<PhaseCoordinator>().pending_phase_change(),
            Some(Phase::Explore)
        );

        let settings = TransitionSettings::default();
        world.spawn((
            Transform::from_position(settings.initial_position),
            Camera::default(),
            CameraController::default(),
        ));
        schedule.run(&mut world);

        assert!(world.resource::<CameraTransition>().is_running());
        assert!(world.resource::<PhaseCoordinator>().is_transitioning());
        assert_eq!(
            world.resource::<PhaseCoordinator>().pending_phase_change(),
            None
        );
    }

    #[test]
    fn test_preempted_transition_cannot_open_gate() {
        let mut world = world(InputMode::Touch);
        let mut schedule = schedule();

        world.resource_mut::<PhaseCoordinator>().start_experience();
        for _ in 0..10 {
            schedule.run(&mut world);
        }

        // Back to setup, then explore again before the first flight ended
        world.resource_mut::<PhaseCoordinator>().set_phase(Phase::Setup);
        schedule.run(&mut world);
        world.resource_mut::<PhaseCoordinator>().start_experience();
        schedule.run(&mut world);

        for _ in 0..20 {
            schedule.run(&mut world);
            assert!(world.resource::<PhaseCoordinator>().is_transitioning());
        }
        for _ in 0..10 {
            schedule.run(&mut world);
        }
        assert!(world.resource::<PhaseCoordinator>().movement_allowed());

        // Touch keeps the focus distance untouched
        let (_, camera, _) = camera(&mut world);
        assert_eq!(camera.focus_distance, Camera::default().focus_distance);
    }
}
