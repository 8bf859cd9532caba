use crate::prelude::*;

const SKY: [f32; 3] = [0.02, 0.03, 0.08];
const INTERIOR: [f32; 3] = [0.10, 0.10, 0.11];
const WARM: [f32; 3] = [0.95, 0.72, 0.42];
/// Share of the warm tone at full pendant brightness
const WARMTH: f32 = 0.35;

pub fn fade_pendant_lights(
    time: Res<Time>,
    lights: Res<LightState>,
    mut pendants: Query<&mut PendantLight>,
) {
    let dt = time.delta_secs();
    for mut pendant in pendants.iter_mut() {
        let on = lights.is_on(&pendant.marker_id);
        pendant.fade(on, dt);
    }
}

/// Tint the window by phase, warmed by the brightest pendant
pub fn update_clear_color(
    coordinator: Res<PhaseCoordinator>,
    pendants: Query<&PendantLight>,
    mut clear_color: ResMut<ClearColor>,
) {
    let base = match coordinator.phase() {
        Phase::Setup => SKY,
        Phase::Explore => INTERIOR,
    };
    let warmth = pendants
        .iter()
        .map(PendantLight::brightness)
        .fold(0.0, f32::max)
        * WARMTH;

    let color = ClearColor(std::array::from_fn(|i| {
        base[i] + (WARM[i] - base[i]) * warmth
    }));
    if *clear_color != color {
        *clear_color = color;
    }
}
