mod events;
mod intent;
mod lights;
mod phase;
mod pointer_lock;
mod transition;

pub use events::*;
pub use intent::*;
pub use lights::*;
pub use phase::*;
pub use pointer_lock::*;
pub use transition::*;
