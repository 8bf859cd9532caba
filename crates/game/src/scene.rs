//! The apartment the walkthrough takes place in, built from boxes.

use crate::prelude::*;

/// Marker ids and floor positions, fixed at design time
pub const MARKERS: &[(&str, [f32; 3])] = &[("light_main_1", [9.70, 1.6, -14.39])];

/// Pendants hang this far above their marker
const PENDANT_HEIGHT: f32 = 1.8;

const STAIR_STEPS: usize = 8;
const STAIR_RISE: f32 = 0.25;
const STAIR_RUN: f32 = 0.5;

const FURNITURE_GROUP: &str = "furniture";

fn spawn_block(world: &mut World, label: &str, group: &str, min: [f32; 3], max: [f32; 3]) {
    world.spawn((
        Tag {
            label: label.to_string(),
        },
        Transform::default(),
        Mesh::cuboid(
            Point3::new(min[0], min[1], min[2]),
            Point3::new(max[0], max[1], max[2]),
        ),
        ModelGroup::new(group),
    ));
}

/// Floors, a staircase up to a raised platform, a terrace and a ledge too tall
/// to step onto. Walkable surfaces go into `walkable_group`.
pub fn spawn_apartment(world: &mut World, walkable_group: &str) {
    spawn_block(world, "Floor", walkable_group, [-20.0, -0.2, -20.0], [20.0, 0.0, 40.0]);

    for step in 1..=STAIR_STEPS {
        let x = 4.0 + (step - 1) as f32 * STAIR_RUN;
        spawn_block(
            world,
            &format!("Stair {}", step),
            walkable_group,
            [x, 0.0, 10.0],
            [x + STAIR_RUN, step as f32 * STAIR_RISE, 14.0],
        );
    }
    let landing = STAIR_STEPS as f32 * STAIR_RISE;
    spawn_block(world, "Mezzanine", walkable_group, [8.0, 0.0, 10.0], [14.0, landing, 20.0]);

    spawn_block(world, "Terrace", walkable_group, [-20.0, 0.0, -20.0], [-14.0, 0.5, -10.0]);
    spawn_block(world, "Kitchen ledge", walkable_group, [-2.0, 0.0, -6.0], [2.0, 1.6, -5.0]);

    // Not walkable, ray casts scoped to the apartment skip it
    spawn_block(world, "Dining table", FURNITURE_GROUP, [-8.0, 0.7, 0.0], [-6.0, 0.8, 2.0]);

    log::debug!("Apartment spawned with {} stair steps", STAIR_STEPS);
}

/// One marker plus its pendant lamp per configured position
pub fn spawn_markers(world: &mut World, settings: &ProximitySettings) {
    for (id, [x, y, z]) in MARKERS {
        let position = Point3::new(*x, *y, *z);
        world.spawn((
            Tag {
                label: format!("Marker {}", id),
            },
            Transform::from_position(position),
            Marker::new(*id, position, settings.radius),
        ));
        world.spawn((
            Tag {
                label: format!("Pendant {}", id),
            },
            Transform::from_position(position + Vector3::y() * PENDANT_HEIGHT),
            PendantLight::new(*id),
        ));
    }
}

/// Presentation camera at its initial pose, looking at the orbit target
pub fn camera_bundle(settings: &TransitionSettings) -> impl Bundle {
    let mut transform = Transform::from_position(settings.initial_position);
    transform.look_at(&settings.orbit_target);

    let camera = Camera {
        target: settings.orbit_target,
        focus_distance: (settings.orbit_target - settings.initial_position).norm(),
    };

    (
        transform,
        camera,
        CameraController::default(),
        OrbitRig::new(settings.orbit_target),
    )
}
