use crate::prelude::*;

/// Slow presentation spin around the model while in setup
pub fn orbit_camera(
    time: Res<Time>,
    coordinator: Res<PhaseCoordinator>,
    transition: Res<CameraTransition>,
    mut cameras: Query<(&mut Transform, &mut Camera, &OrbitRig)>,
) {
    if coordinator.phase() != Phase::Setup
        || transition.is_running()
        || coordinator.is_pose_claimed()
    {
        return;
    }

    let dt = time.delta_secs();
    for (mut transform, mut camera, rig) in cameras.iter_mut() {
        transform.position = rig.orbit(&transform.position, dt);
        transform.look_at(&rig.target);
        camera.target = rig.target;
    }
}
