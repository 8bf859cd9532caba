mod device_layer;

pub use device_layer::*;
