//! Rendering module - underwater fog, clear colour and lighting levels.

mod plugin;
pub mod visual_config;

pub use plugin::RenderingPlugin;
pub use visual_config::VisualConfig;
