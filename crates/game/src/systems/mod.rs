mod actions;
mod input;
mod lighting;
mod look;
mod movement;
mod orbit;
mod pointer_lock;
mod proximity;
mod transition;

pub use actions::*;
pub use input::*;
pub use lighting::*;
pub use look::*;
pub use movement::*;
pub use orbit::*;
pub use pointer_lock::*;
pub use proximity::*;
pub use transition::*;
