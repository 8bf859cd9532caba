pub mod device;
pub mod present;

pub use device::DeviceLayer;
pub use present::PresentLayer;
