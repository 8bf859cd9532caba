use crate::prelude::*;

/// Represents a ray in 3D space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>, // Should be normalized
}

impl Ray {
    /// Create a new ray with a normalized direction
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray pointing straight down from `origin`
    pub fn down(origin: Point3<f32>) -> Self {
        Self::new(origin, -Vector3::y())
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Nearest surface a ray ran into
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// Distance along the ray to the hit point
    pub distance: f32,
    /// The hit point in world space
    pub point: Point3<f32>,
}

/// Test if a ray intersects a triangle, from either side.
/// Returns the distance along the ray (Möller–Trumbore).
pub fn ray_triangle_intersection(ray: &Ray, triangle: &[Point3<f32>; 3]) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let [a, b, c] = triangle;
    let edge1 = b - a;
    let edge2 = c - a;

    let p = ray.direction.cross(&edge2);
    let determinant = edge1.dot(&p);

    // Ray parallel to the triangle plane
    if determinant.abs() < EPSILON {
        return None;
    }

    let inverse = 1.0 / determinant;
    let s = ray.origin - a;
    let u = s.dot(&p) * inverse;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = ray.direction.dot(&q) * inverse;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(&q) * inverse;
    (t >= 0.0).then_some(t)
}

/// Anything that can report the floor height under a point.
/// Implemented by the scene for gameplay and by flat planes in tests.
pub trait GroundProbe {
    /// Height of the first surface hit by a downward ray from `origin`, if any
    /// surface lies within `max_distance`
    fn ground_below(&self, origin: Point3<f32>, max_distance: f32) -> Option<f32>;
}

/// The meshes a ray cast should consider this frame.
///
/// Triangles are moved into world space as a cast walks them, nothing is
/// copied up front.
pub struct SceneQuery<'a> {
    meshes: Vec<(&'a Mesh, &'a Transform)>,
}

impl<'a> SceneQuery<'a> {
    /// Collect the meshes of `group`, or every mesh when nothing belongs to that group
    pub fn scoped(
        meshes: impl IntoIterator<Item = (&'a Mesh, &'a Transform, Option<&'a ModelGroup>)>,
        group: &str,
    ) -> Self {
        let candidates: Vec<_> = meshes.into_iter().collect();
        let has_group = candidates
            .iter()
            .any(|(_, _, model_group)| model_group.is_some_and(|g| g.is(group)));

        let meshes = candidates
            .into_iter()
            .filter(|(_, _, model_group)| !has_group || model_group.is_some_and(|g| g.is(group)))
            .map(|(mesh, transform, _)| (mesh, transform))
            .collect();

        Self { meshes }
    }

    fn triangles(&self) -> impl Iterator<Item = [Point3<f32>; 3]> + '_ {
        self.meshes.iter().flat_map(|&(mesh, transform)| {
            mesh.triangles().map(move |[a, b, c]| {
                [
                    transform.transform_point(&a),
                    transform.transform_point(&b),
                    transform.transform_point(&c),
                ]
            })
        })
    }

    /// Nearest hit within `max_distance`
    pub fn cast(&self, ray: &Ray, max_distance: f32) -> Option<RayHit> {
        self.triangles()
            .filter_map(|triangle| ray_triangle_intersection(ray, &triangle))
            .filter(|distance| *distance <= max_distance)
            .min_by(|a, b| a.total_cmp(b))
            .map(|distance| RayHit {
                distance,
                point: ray.point_at(distance),
            })
    }
}

impl GroundProbe for SceneQuery<'_> {
    fn ground_below(&self, origin: Point3<f32>, max_distance: f32) -> Option<f32> {
        self.cast(&Ray::down(origin), max_distance)
            .map(|hit| hit.point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(y: f32) -> Mesh {
        Mesh::cuboid(Point3::new(-10.0, y - 0.1, -10.0), Point3::new(10.0, y, 10.0))
    }

    #[test]
    fn test_ray_triangle_hit() {
        let ray = Ray::new(Point3::new(0.2, 5.0, 0.2), Vector3::new(0.0, -1.0, 0.0));
        let triangle = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];

        let hit = ray_triangle_intersection(&ray, &triangle);
        assert!(hit.is_some());
        assert!((hit.unwrap() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_ray_triangle_miss() {
        let ray = Ray::new(Point3::new(2.0, 5.0, 2.0), Vector3::new(0.0, -1.0, 0.0));
        let triangle = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];

        assert!(ray_triangle_intersection(&ray, &triangle).is_none());
    }

    #[test]
    fn test_ray_behind_origin_is_ignored() {
        let ray = Ray::down(Point3::new(0.2, -1.0, 0.2));
        let triangle = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];

        assert!(ray_triangle_intersection(&ray, &triangle).is_none());
    }

    #[test]
    fn test_scene_cast_finds_nearest_surface() {
        let lower = floor(0.0);
        let upper = floor(1.0);
        let transform = Transform::default();
        let scene = SceneQuery::scoped(
            [(&lower, &transform, None), (&upper, &transform, None)],
            "apartment-model",
        );

        let ground = scene.ground_below(Point3::new(0.5, 3.0, 0.5), 100.0);
        assert!((ground.unwrap() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_scene_cast_respects_max_distance() {
        let mesh = floor(0.0);
        let transform = Transform::default();
        let scene = SceneQuery::scoped([(&mesh, &transform, None)], "apartment-model");

        assert!(scene.ground_below(Point3::new(0.5, 150.0, 0.25), 100.0).is_none());
        assert!(scene.ground_below(Point3::new(0.5, 50.0, 0.25), 100.0).is_some());
    }

    #[test]
    fn test_scene_cast_applies_entity_transform() {
        let mesh = floor(0.0);
        let transform = Transform::from_position(Point3::new(0.0, 2.5, 0.0));
        let scene = SceneQuery::scoped([(&mesh, &transform, None)], "apartment-model");

        let ground = scene.ground_below(Point3::new(0.5, 10.0, 0.25), 100.0);
        assert!((ground.unwrap() - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_scope_skips_other_groups() {
        let walkable = floor(0.0);
        let table = Mesh::cuboid(Point3::new(-1.0, 0.7, -1.0), Point3::new(1.0, 0.8, 1.0));
        let transform = Transform::default();
        let apartment = ModelGroup::new("apartment-model");
        let furniture = ModelGroup::new("furniture");

        let scoped = SceneQuery::scoped(
            [
                (&walkable, &transform, Some(&apartment)),
                (&table, &transform, Some(&furniture)),
            ],
            "apartment-model",
        );
        let ground = scoped.ground_below(Point3::new(0.5, 1.7, 0.25), 100.0);
        assert!(ground.unwrap().abs() < 1e-4);

        // Without the group everything is a candidate, including the table top
        let unscoped = SceneQuery::scoped(
            [
                (&walkable, &transform, Some(&apartment)),
                (&table, &transform, Some(&furniture)),
            ],
            "missing-group",
        );
        let ground = unscoped.ground_below(Point3::new(0.5, 1.7, 0.25), 100.0);
        assert!((ground.unwrap() - 0.8).abs() < 1e-4);
    }

    #[test]
    fn test_scene_cast_follows_transform_changes() {
        let mesh = floor(0.0);
        let mut transform = Transform::from_position(Point3::new(0.0, 1.0, 0.0));
        let origin = Point3::new(0.5, 10.0, 0.25);

        let ground = SceneQuery::scoped([(&mesh, &transform, None)], "apartment-model")
            .ground_below(origin, 100.0);
        assert!((ground.unwrap() - 1.0).abs() < 1e-4);

        transform.position.y = 3.0;
        transform.scale = Vector3::new(2.0, 1.0, 2.0);
        let ground = SceneQuery::scoped([(&mesh, &transform, None)], "apartment-model")
            .ground_below(origin, 100.0);
        assert!((ground.unwrap() - 3.0).abs() < 1e-4);

        // Scaled out to 20 units, so a point beyond the original 10 is covered
        let ground = SceneQuery::scoped([(&mesh, &transform, None)], "apartment-model")
            .ground_below(Point3::new(15.5, 10.0, 0.25), 100.0);
        assert!((ground.unwrap() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_scene_has_no_ground() {
        let scene = SceneQuery::scoped(std::iter::empty(), "apartment-model");
        assert!(scene.ground_below(Point3::origin(), 100.0).is_none());
    }
}
