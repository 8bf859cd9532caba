use crate::prelude::*;

/// Distance between two points projected onto the ground plane
pub fn horizontal_distance(a: &Point3<f32>, b: &Point3<f32>) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Exit,
}

/// Fixed point of interest next to a pendant lamp
#[derive(Component, Clone, Debug)]
pub struct Marker {
    pub id: String,
    pub position: Point3<f32>,
    pub radius: f32,
    /// Whether the camera was inside the radius last frame
    pub inside: bool,
}

impl Marker {
    pub fn new(id: impl Into<String>, position: Point3<f32>, radius: f32) -> Self {
        Self {
            id: id.into(),
            position,
            radius,
            inside: false,
        }
    }

    /// Track the camera and report a threshold crossing, at most one per call
    pub fn update(&mut self, camera: &Point3<f32>) -> Option<Crossing> {
        let inside = horizontal_distance(camera, &self.position) < self.radius;
        match (self.inside, inside) {
            (false, true) => {
                self.inside = true;
                Some(Crossing::Enter)
            }
            (true, false) => {
                self.inside = false;
                Some(Crossing::Exit)
            }
            _ => None,
        }
    }

    /// Force the marker outside. Returns whether that was a crossing.
    pub fn leave(&mut self) -> bool {
        std::mem::replace(&mut self.inside, false)
    }
}
