use crate::prelude::*;

struct PresentSurface {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    is_configured: bool,
}

/// Layer that clears the window to the world's `ClearColor` and presents it.
/// Add it last so it sees the color the other layers settled on this frame.
pub struct PresentLayer {
    target: Option<PresentSurface>,
}

impl PresentLayer {
    pub fn new(context: &LayerContext) -> Self {
        let size = context.window.inner_size();

        // Take ownership of surface and adapter since they can't be cloned
        let taken = {
            let mut world = context.world.lock().unwrap_or_else(|p| p.into_inner());
            let device = world.get_resource::<GpuDevice>().map(|d| d.0.clone());
            let queue = world.get_resource::<GpuQueue>().map(|q| q.0.clone());
            let adapter = world
                .get_resource_mut::<GpuAdapter>()
                .and_then(|mut adapter| adapter.0.take());
            let surface = world
                .get_resource_mut::<GpuSurface>()
                .and_then(|mut surface| surface.0.take());

            match (device, queue, adapter, surface) {
                (Some(device), Some(queue), Some(adapter), Some(surface)) => {
                    Some((device, queue, adapter, surface))
                }
                _ => None,
            }
        };

        let Some((device, queue, adapter, surface)) = taken else {
            log::warn!("No GPU surface available, frames will not be presented");
            return Self { target: None };
        };

        let surface_caps = surface.get_capabilities(&adapter);
        let Some(&fallback_format) = surface_caps.formats.first() else {
            log::warn!("Surface reports no supported formats, frames will not be presented");
            return Self { target: None };
        };
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(fallback_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let mut target = PresentSurface {
            surface,
            device,
            queue,
            config,
            is_configured: false,
        };
        target.resize(size.width, size.height);

        Self {
            target: Some(target),
        }
    }
}

impl PresentSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.is_configured = true;
        }
    }
}

impl Layer for PresentLayer {
    fn frame(&mut self, context: &LayerContext) -> std::result::Result<(), wgpu::SurfaceError> {
        let Some(target) = &mut self.target else {
            return Ok(());
        };
        if !target.is_configured {
            return Ok(());
        }

        let clear_color = {
            let world = context.world.lock().unwrap_or_else(|p| p.into_inner());
            world
                .get_resource::<ClearColor>()
                .copied()
                .unwrap_or_default()
        };

        let surface_texture = match target.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(error @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::debug!("Surface {}, reconfiguring", error);
                target.surface.configure(&target.device, &target.config);
                return Ok(());
            }
            Err(error) => return Err(error),
        };
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = target
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
        }

        target.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}

    fn event(&mut self, _context: &LayerContext, event: LayerEvent) {
        let LayerEvent::WindowEvent(window_event) = event;
        if let winit::event::WindowEvent::Resized(physical_size) = *window_event {
            if let Some(target) = &mut self.target {
                target.resize(physical_size.width, physical_size.height);
            }
        }
    }
}
