mod present_layer;

pub use present_layer::*;
