//! Player module - input adapter, submarine camera and spotlight.

mod camera;
mod components;
mod input;
mod plugin;

pub use components::*;
pub use plugin::PlayerPlugin;
