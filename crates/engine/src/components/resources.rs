use crate::prelude::*;

use std::time::Duration;

#[derive(Resource)]
pub struct GpuDevice(pub wgpu::Device);

#[derive(Resource)]
pub struct GpuQueue(pub wgpu::Queue);

#[derive(Resource)]
pub struct GpuSurface(pub Option<wgpu::Surface<'static>>);

#[derive(Resource)]
pub struct GpuAdapter(pub Option<wgpu::Adapter>);

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Time(pub Duration);

impl Time {
    pub fn delta_secs(&self) -> f32 {
        self.0.as_secs_f32()
    }
}

#[derive(Resource, Clone, Copy, PartialEq, Eq, Debug)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// Color the presenting layer clears the window to, linear RGB
#[derive(Resource, Clone, Copy, PartialEq, Debug)]
pub struct ClearColor(pub [f32; 3]);

impl Default for ClearColor {
    fn default() -> Self {
        Self([0.0, 0.0, 0.0])
    }
}

impl ClearColor {
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b] = self.0;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }
}
