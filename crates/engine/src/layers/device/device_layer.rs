use crate::prelude::*;

/// Layer that initializes the GPU device, queue, and surface.
/// Must run before PresentLayer. Without a usable adapter the walkthrough keeps
/// running and simply presents nothing.
pub struct DeviceLayer;

impl DeviceLayer {
    pub fn new(context: &LayerContext) -> Self {
        match Self::request_gpu(context) {
            Ok(()) => log::info!("GPU device ready"),
            Err(e) => log::error!("Running without a GPU surface: {:#}", e),
        }

        Self
    }

    fn request_gpu(context: &LayerContext) -> crate::Result<()> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(context.window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("wiser device"),
            required_features: wgpu::Features::empty(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            required_limits: if cfg!(target_arch = "wasm32") {
                wgpu::Limits::downlevel_webgl2_defaults()
            } else {
                wgpu::Limits::default()
            },
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        }))?;

        let mut world = context.world.lock().unwrap_or_else(|p| p.into_inner());
        world.insert_resource(GpuDevice(device));
        world.insert_resource(GpuQueue(queue));
        world.insert_resource(GpuAdapter(Some(adapter)));
        world.insert_resource(GpuSurface(Some(surface)));

        Ok(())
    }
}

impl Layer for DeviceLayer {
    fn frame(&mut self, _context: &LayerContext) -> std::result::Result<(), wgpu::SurfaceError> {
        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}
