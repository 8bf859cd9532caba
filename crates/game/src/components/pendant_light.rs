use crate::prelude::*;

/// Lamp hanging above a marker, switched through the light state of that marker
#[derive(Component, Clone, Debug)]
pub struct PendantLight {
    pub marker_id: String,
    pub intensity: f32,
    pub on_intensity: f32,
    /// Fraction of the remaining gap closed per second
    pub fade_rate: f32,
}

impl PendantLight {
    pub fn new(marker_id: impl Into<String>) -> Self {
        Self {
            marker_id: marker_id.into(),
            intensity: 0.0,
            on_intensity: 50.0,
            fade_rate: 5.0,
        }
    }

    pub fn fade(&mut self, on: bool, dt: f32) {
        let target = if on { self.on_intensity } else { 0.0 };
        self.intensity += (target - self.intensity) * (dt * self.fade_rate).min(1.0);
    }

    /// Intensity relative to fully on, in [0, 1]
    pub fn brightness(&self) -> f32 {
        if self.on_intensity <= 0.0 {
            return 0.0;
        }
        (self.intensity / self.on_intensity).clamp(0.0, 1.0)
    }
}
