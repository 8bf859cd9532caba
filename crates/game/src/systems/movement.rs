use crate::prelude::*;

/// Whether a move onto ground at `ground_y` is a step rather than a wall
pub fn step_accepted(ground_y: f32, camera_y: f32, eye_height: f32, step_limit: f32) -> bool {
    let foot_y = camera_y - eye_height;
    ground_y - foot_y < step_limit
}

/// Ease the camera height toward standing on `ground_y`
pub fn follow_ground(camera_y: f32, ground_y: f32, eye_height: f32, dt: f32, rate: f32) -> f32 {
    let target = ground_y + eye_height;
    camera_y + (target - camera_y) * (dt * rate).min(1.0)
}

/// Unit walking direction on the ground plane, zero when there is no intent
pub fn desired_direction(
    rotation: &UnitQuaternion<f32>,
    intent: &InputIntent,
    dead_zone: f32,
) -> Vector3<f32> {
    if !intent.is_moving(dead_zone) {
        return Vector3::zeros();
    }

    let axis = |value: f32| if value.abs() > dead_zone { value } else { 0.0 };
    let (forward, right) = horizontal_basis(rotation);
    (forward * axis(intent.move_forward) + right * axis(intent.move_strafe))
        .try_normalize(1e-6)
        .unwrap_or_else(Vector3::zeros)
}

/// Resolve one frame of movement against the walkable ground.
///
/// A horizontal move is taken whole or not at all. Without a displacement the
/// camera is only kept at eye height above whatever is beneath it.
pub fn resolve_step(
    position: Point3<f32>,
    displacement: Vector3<f32>,
    dt: f32,
    ground: &impl GroundProbe,
    settings: &GroundingSettings,
) -> Point3<f32> {
    let follow = |ground_y: f32| {
        follow_ground(
            position.y,
            ground_y,
            settings.eye_height,
            dt,
            settings.follow_rate,
        )
    };

    if displacement.x == 0.0 && displacement.z == 0.0 {
        let probe = position + Vector3::y() * settings.idle_probe_offset;
        return match ground.ground_below(probe, settings.max_ray_distance) {
            Some(ground_y) => Point3::new(position.x, follow(ground_y), position.z),
            None => position,
        };
    }

    let candidate = Point3::new(
        position.x + displacement.x,
        position.y,
        position.z + displacement.z,
    );
    match ground.ground_below(candidate, settings.max_ray_distance) {
        Some(ground_y)
            if step_accepted(
                ground_y,
                position.y,
                settings.eye_height,
                settings.step_limit,
            ) =>
        {
            Point3::new(candidate.x, follow(ground_y), candidate.z)
        }
        _ => position,
    }
}

/// First-person walk with ground following
pub fn move_camera(
    time: Res<Time>,
    coordinator: Res<PhaseCoordinator>,
    mode: Res<InputMode>,
    settings: Res<GroundingSettings>,
    mut intent: ResMut<InputIntent>,
    mut cameras: Query<(&mut Transform, &mut Camera, &CameraController)>,
    scene: Query<(&Mesh, &Transform, Option<&ModelGroup>), Without<CameraController>>,
) {
    // The transition driver owns the camera until its gate is released
    if !coordinator.movement_allowed() {
        intent.take_look_delta();
        return;
    }

    let dt = time.delta_secs();
    let (look_x, look_y) = intent.take_look_delta();
    let dead_zone = match *mode {
        InputMode::Touch => settings.touch_dead_zone,
        InputMode::Desktop => 0.0,
    };
    let ground = SceneQuery::scoped(scene.iter(), &settings.walkable_group);

    for (mut transform, mut camera, controller) in cameras.iter_mut() {
        if look_x != 0.0 || look_y != 0.0 {
            transform.rotation = apply_look(
                &transform.rotation,
                look_x,
                look_y,
                controller.touch_pitch_limit,
            );
        }

        let direction = desired_direction(&transform.rotation, &intent, dead_zone);
        let displacement = direction * controller.speed(*mode, intent.sprint) * dt;

        let position = resolve_step(transform.position, displacement, dt, &ground, &settings);
        if position != transform.position {
            transform.position = position;
        }
        camera.aim_along(&transform);
    }
}
