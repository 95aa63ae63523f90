//! Simulation core - craft movement, interactions and procedural animation.
//!
//! Nothing in here touches the ECS world or the renderer. The presentation
//! plugins feed [`InputEvent`]s into an [`InputState`], call
//! [`Simulation::tick`] once per frame and render whatever the resulting
//! [`SimulationState`] holds.

pub mod animation;
pub mod config;
mod error;
pub mod input;
pub mod interaction;
pub mod lighting;
pub mod movement;
mod simulation;
pub mod status;

pub use animation::{AmbientEntity, AmbientKind, FishMotion, SeaweedSway};
pub use config::WorldConfig;
pub use error::{ConfigError, SimulationError};
pub use input::{InputCode, InputEvent, InputState, LookAngles, Trigger};
pub use interaction::{Hint, InteractionEvent, LidPose, Pearl, PearlId, PearlState, TreasureChest};
pub use lighting::LightingState;
pub use movement::{CameraRig, PlayerCraft, SpotlightPose};
pub use simulation::{Environment, Simulation, SimulationState, TickOutcome};
pub use status::StatusSnapshot;
