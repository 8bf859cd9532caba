pub use crate::components::*;
pub use crate::resources::*;
pub use crate::settings::*;
pub use crate::utils::*;

pub use wiser_engine::prelude::*;
