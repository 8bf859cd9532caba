pub use bevy_ecs::world::World;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use winit::{application::ApplicationHandler, event::WindowEvent, window::Window};

use crate::components::{ClearColor, WindowSize};
use crate::input::InputState;
pub type Result<T> = anyhow::Result<T>;

pub mod components;
pub mod input;
pub mod layers;
pub mod prelude;

pub trait Layer: 'static {
    fn frame(&mut self, context: &LayerContext) -> std::result::Result<(), wgpu::SurfaceError>;
    fn detach(&mut self, context: &LayerContext);
    fn event(&mut self, _context: &LayerContext, _event: LayerEvent) {}
}

pub trait LayerFactory: 'static {
    fn create(&self, context: &LayerContext) -> Box<dyn Layer>;
}

pub struct LayerContext {
    pub window: Arc<Window>,
    pub world: Arc<Mutex<World>>,
    pub delta_time: Duration,
}

pub enum LayerEvent {
    WindowEvent(Arc<WindowEvent>),
}

pub struct ApplicationBuilder {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    title: String,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            layer_factories: Vec::new(),
            title: String::from("wiser"),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_layer_factory(mut self, factory: impl LayerFactory) -> Self {
        self.layer_factories.push(Box::new(factory));
        self
    }

    pub fn add_layer<F>(mut self, factory_fn: F) -> Self
    where
        F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
    {
        self.layer_factories
            .push(Box::new(ClosureLayerFactory::new(factory_fn)));
        self
    }

    pub fn build(self) -> Application {
        let mut world = World::new();
        world.insert_resource(InputState::new());
        world.insert_resource(ClearColor::default());

        Application {
            layer_factories: self.layer_factories,
            title: self.title,
            state: None,
            world: Arc::new(Mutex::new(world)),
        }
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureLayerFactory<F> {
    factory_fn: F,
}

impl<F> ClosureLayerFactory<F> {
    fn new(factory_fn: F) -> Self {
        Self { factory_fn }
    }
}

impl<F> LayerFactory for ClosureLayerFactory<F>
where
    F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
{
    fn create(&self, context: &LayerContext) -> Box<dyn Layer> {
        (self.factory_fn)(context)
    }
}

pub struct Application {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    title: String,
    state: Option<ApplicationState>,
    world: Arc<Mutex<World>>,
}

pub struct ApplicationState {
    window: Arc<Window>,
    layers: Vec<Box<dyn Layer>>,
    last_frame_time: Instant,
    /// Cursor capture currently applied to the window
    cursor_captured: bool,
}

impl Application {
    /// Shared world, for spawning scene content before the event loop starts
    pub fn world(&self) -> Arc<Mutex<World>> {
        self.world.clone()
    }

    pub fn spawn<B: bevy_ecs::bundle::Bundle>(&mut self, label: impl Into<String>, bundle: B) {
        use crate::prelude::*;
        let bundle = (
            Tag {
                label: label.into(),
            },
            bundle,
        );
        lock_world(&self.world).spawn(bundle);
    }

    fn redraw(&mut self) -> std::result::Result<(), wgpu::SurfaceError> {
        let state = match &mut self.state {
            Some(state) => state,
            None => return Ok(()),
        };

        let now = Instant::now();
        let delta_time = now.duration_since(state.last_frame_time);
        state.last_frame_time = now;

        let context = LayerContext {
            window: state.window.clone(),
            world: self.world.clone(),
            delta_time,
        };

        let (result, wants_capture) = run_frame(
            &self.world,
            state.layers.iter_mut().map(|layer| layer.frame(&context)),
        );

        // Layers decide capture; the window only mirrors it
        if wants_capture != state.cursor_captured {
            apply_cursor_capture(&state.window, wants_capture);
            state.cursor_captured = wants_capture;
        }

        result
    }

    fn record_input(&mut self, event: &WindowEvent) {
        use winit::event::ElementState;
        use winit::keyboard::PhysicalKey;

        let mut world = lock_world(&self.world);

        if let WindowEvent::Resized(size) = event {
            world.insert_resource(WindowSize {
                width: size.width,
                height: size.height,
            });
        }

        let Some(mut input_state) = world.get_resource_mut::<InputState>() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let PhysicalKey::Code(keycode) = key_event.physical_key {
                    match key_event.state {
                        ElementState::Pressed if !key_event.repeat => input_state.press_key(keycode),
                        ElementState::Pressed => {}
                        ElementState::Released => input_state.release_key(keycode),
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => input_state.press_button(*button),
                ElementState::Released => input_state.release_button(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                input_state.set_mouse_position(position.x as f32, position.y as f32);
            }
            WindowEvent::Touch(touch) => {
                input_state.push_touch(
                    touch.id,
                    touch.phase,
                    touch.location.x as f32,
                    touch.location.y as f32,
                );
            }
            WindowEvent::Focused(false) => input_state.release_all(),
            _ => {}
        }
    }
}

/// Run the layers in order until one fails, then close the frame either way.
///
/// Returns the first failure and whether the layers want the cursor captured.
fn run_frame(
    world: &Arc<Mutex<World>>,
    layers: impl IntoIterator<Item = std::result::Result<(), wgpu::SurfaceError>>,
) -> (std::result::Result<(), wgpu::SurfaceError>, bool) {
    let result = layers.into_iter().collect::<std::result::Result<(), _>>();

    let mut world = lock_world(world);
    let wants_capture = world
        .get_resource::<InputState>()
        .is_some_and(|input| input.mouse_captured);

    // Edges and deltas were visible to every layer that ran this frame
    if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
        input_state.reset_frame();
    }
    world.clear_trackers();

    (result, wants_capture)
}

fn lock_world(world: &Arc<Mutex<World>>) -> std::sync::MutexGuard<'_, World> {
    // A panicking layer poisons the lock; the world itself is still usable
    world.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn apply_cursor_capture(window: &Window, captured: bool) {
    use winit::window::CursorGrabMode;

    if captured {
        window.set_cursor_visible(false);
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => log::info!("Pointer captured"),
            Err(e) => log::warn!("Unable to capture pointer: {}", e),
        }
    } else {
        window.set_cursor_visible(true);
        let _ = window.set_cursor_grab(CursorGrabMode::None);
        log::info!("Pointer released");
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        {
            let size = window.inner_size();
            lock_world(&self.world).insert_resource(WindowSize {
                width: size.width,
                height: size.height,
            });
        }

        let context = LayerContext {
            window: window.clone(),
            world: self.world.clone(),
            delta_time: Duration::ZERO,
        };

        let layers: Vec<Box<dyn Layer>> = self
            .layer_factories
            .iter()
            .map(|factory| factory.create(&context))
            .collect();

        self.state = Some(ApplicationState {
            window,
            layers,
            last_frame_time: Instant::now(),
            cursor_captured: false,
        });
    }

    fn suspended(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.detach(&context);
            }
        }
        self.state = None;
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        self.record_input(&event);

        let event = Arc::new(event);

        match *event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {}
                Err(e) => {
                    log::error!("Unable to render {}", e);
                }
            },
            _ => {}
        }

        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.event(&context, LayerEvent::WindowEvent(event.clone()));
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &winit::event_loop::ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        use winit::event::DeviceEvent;

        let mut world = lock_world(&self.world);
        if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
            if let DeviceEvent::MouseMotion { delta } = event {
                input_state.add_mouse_delta(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}
