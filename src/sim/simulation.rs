//! The simulation owner and its per-frame tick.

use bevy::prelude::*;

use super::animation::{animate_ambient, animate_pearls, AmbientEntity};
use super::config::WorldConfig;
use super::error::SimulationError;
use super::input::{InputState, Trigger};
use super::interaction::{
    activate, interact, select_hint, InteractionEvent, Pearl, PearlCollection, TreasureChest,
};
use super::lighting::LightingState;
use super::movement::{camera_rig, integrate, spotlight_pose, CameraRig, PlayerCraft, SpotlightPose};
use super::status::{depth_reading, StatusSnapshot};

/// Everything that changes while the demo runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub player: PlayerCraft,
    pub pearls: PearlCollection,
    pub treasure: TreasureChest,
    pub ambient: Vec<AmbientEntity>,
    pub lighting: LightingState,
    pub camera: CameraRig,
    pub spotlight: SpotlightPose,
    pub ticks: u64,
}

impl SimulationState {
    /// Fresh state: craft at its spawn point, chest closed, lights at default.
    pub fn new(config: &WorldConfig, pearls: Vec<Pearl>, ambient: Vec<AmbientEntity>) -> Self {
        let player = PlayerCraft::new(Vec3::from(config.craft.spawn), config.craft.speed);
        let camera = camera_rig(&player, &config.craft);
        let spotlight = spotlight_pose(&player, &config.craft);
        Self {
            player,
            pearls: PearlCollection::new(pearls),
            treasure: TreasureChest::new(Vec3::from(config.interaction.treasure_position)),
            ambient,
            lighting: LightingState::default(),
            camera,
            spotlight,
            ticks: 0,
        }
    }
}

/// Capabilities the presentation layer reports before the loop starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Name of the graphics adapter, if one is available.
    pub graphics_adapter: Option<String>,
}

impl Environment {
    pub fn with_adapter(name: impl Into<String>) -> Self {
        Self {
            graphics_adapter: Some(name.into()),
        }
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickOutcome {
    pub events: Vec<InteractionEvent>,
    pub status: StatusSnapshot,
}

/// Single owner of the simulation state.
#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    state: SimulationState,
    config: WorldConfig,
}

impl Simulation {
    /// Start the simulation. Fails if the environment cannot render.
    pub fn start(
        state: SimulationState,
        config: WorldConfig,
        environment: &Environment,
    ) -> Result<Self, SimulationError> {
        let Some(adapter) = &environment.graphics_adapter else {
            return Err(SimulationError::EnvironmentUnsupported {
                reason: "no graphics adapter available".to_string(),
            });
        };
        info!(
            "Starting simulation on '{}' with {} pearls and {} ambient entities",
            adapter,
            state.pearls.len(),
            state.ambient.len()
        );
        Ok(Self { state, config })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Advance the world by `dt` seconds.
    ///
    /// Order: movement, then queued triggers, then animation. Triggers queued
    /// in `input` are consumed.
    pub fn tick(&mut self, dt: f32, input: &mut InputState) -> TickOutcome {
        let craft_config = &self.config.craft;
        let frame_scale = dt.clamp(0.0, craft_config.max_frame_time) * craft_config.reference_tick_rate;
        let triggers = input.take_triggers();
        let state = &mut self.state;

        integrate(&mut state.player, input, craft_config, frame_scale);
        state.camera = camera_rig(&state.player, craft_config);
        state.spotlight = spotlight_pose(&state.player, craft_config);

        let mut events = Vec::new();
        let craft_position = state.player.position;
        for trigger in triggers {
            let event = match trigger {
                Trigger::Interact => {
                    interact(&mut state.pearls, craft_position, &self.config.interaction)
                }
                Trigger::Activate => {
                    activate(&mut state.treasure, craft_position, &self.config.interaction)
                }
                Trigger::DecreaseLight => {
                    state.lighting.dim();
                    debug!("Spotlight at {}%", state.lighting.percentage());
                    None
                }
                Trigger::IncreaseLight => {
                    state.lighting.brighten();
                    debug!("Spotlight at {}%", state.lighting.percentage());
                    None
                }
            };
            events.extend(event);
        }

        animate_ambient(&mut state.ambient, self.config.fauna.fish_bound, frame_scale);
        animate_pearls(&mut state.pearls, frame_scale);
        state
            .pearls
            .carry(craft_position + Vec3::from(self.config.interaction.carry_offset));

        state.ticks += 1;

        TickOutcome {
            events,
            status: self.status(),
        }
    }

    /// Status derived from the current state.
    pub fn status(&self) -> StatusSnapshot {
        let state = &self.state;
        StatusSnapshot {
            depth: depth_reading(state.player.position.y),
            light_percent: state.lighting.percentage(),
            pearls_collected: state.pearls.collected(),
            treasure_opened: state.treasure.is_open(),
            hint: select_hint(
                &state.pearls,
                &state.treasure,
                state.player.position,
                &self.config.interaction,
            ),
        }
    }
}
