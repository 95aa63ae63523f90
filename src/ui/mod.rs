//! UI module - HUD and message screens.

mod hud;
mod plugin;

pub use plugin::UiPlugin;
