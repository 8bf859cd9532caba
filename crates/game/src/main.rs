use wiser_engine::{
    ApplicationBuilder, Result,
    layers::{DeviceLayer, PresentLayer},
};
use winit::event_loop::EventLoop;

use crate::prelude::*;
use crate::walkthrough_layer::WalkthroughLayer;

mod components;
mod prelude;
mod resources;
mod scene;
mod settings;
mod systems;
mod utils;
mod walkthrough_layer;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("wiser_walkthrough", log::LevelFilter::Debug)
        .filter_module("wiser_engine", log::LevelFilter::Debug)
        .init();

    let event_loop = EventLoop::with_user_event().build()?;

    let mut app = ApplicationBuilder::new()
        .with_title("Wiser walkthrough")
        .add_layer(|context| Box::new(DeviceLayer::new(context)))
        .add_layer(|context| Box::new(WalkthroughLayer::new(context)))
        // Last, so it presents the color the walkthrough settled on
        .add_layer(|context| Box::new(PresentLayer::new(context)))
        .build();

    let mode = InputMode::from_env();
    log::info!("Using {:?} controls", mode);

    let grounding = GroundingSettings::default();
    let proximity = ProximitySettings::default();
    let transitions = TransitionSettings::default();
    {
        let world = app.world();
        let mut world = world.lock().unwrap_or_else(|p| p.into_inner());
        scene::spawn_apartment(&mut world, &grounding.walkable_group);
        scene::spawn_markers(&mut world, &proximity);

        world.insert_resource(mode);
        world.insert_resource(grounding);
        world.insert_resource(proximity);
        world.insert_resource(transitions.clone());
    }

    app.spawn("Camera", scene::camera_bundle(&transitions));

    event_loop.run_app(&mut app)?;

    Ok(())
}
