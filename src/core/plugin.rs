//! Core plugin that sets up game states, events and the simulation driver.

use bevy::prelude::*;
use bevy::render::renderer::RenderAdapterInfo;

use super::events::*;
use super::states::*;
use crate::sim::{Environment, InputState, Simulation, StatusSnapshot, WorldConfig};
use crate::world::{SceneAppearances, SceneBlueprint};

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, Unsupported)
/// - Simulation events (PearlCollectedEvent, TreasureOpenedEvent, ...)
/// - The ordered `SimSet` pipeline and the tick system
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register simulation events
            .add_event::<PearlCollectedEvent>()
            .add_event::<PearlPlacedEvent>()
            .add_event::<TreasureOpenedEvent>()

            .init_resource::<InputState>()
            .init_resource::<CurrentStatus>()

            // Input -> Tick -> Present, only while playing
            .configure_sets(
                Update,
                (SimSet::Input, SimSet::Tick, SimSet::Present)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )

            .add_systems(Startup, load_world_config)
            .add_systems(Update, start_simulation.run_if(in_state(GameState::Loading)))
            .add_systems(Update, run_simulation.in_set(SimSet::Tick));
    }
}

/// Latest status snapshot, rewritten only when a value changes.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct CurrentStatus(pub StatusSnapshot);

/// Why the simulation refused to start.
#[derive(Resource, Debug, Clone)]
pub struct StartupFailure(pub String);

fn load_world_config(mut commands: Commands) {
    commands.insert_resource(WorldConfig::load_or_default());
}

/// Check the environment, generate the world and start the simulation.
fn start_simulation(
    mut commands: Commands,
    config: Res<WorldConfig>,
    adapter: Option<Res<RenderAdapterInfo>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let environment = Environment {
        graphics_adapter: adapter.map(|info| info.name.clone()),
    };

    let blueprint = SceneBlueprint::from_config(&config);
    match Simulation::start(blueprint.state, config.clone(), &environment) {
        Ok(simulation) => {
            commands.insert_resource(simulation);
            commands.insert_resource(SceneAppearances {
                seed: blueprint.seed,
                appearances: blueprint.appearances,
            });
            next_state.set(GameState::InGame);
        }
        Err(e) => {
            error!("{}", e);
            commands.insert_resource(StartupFailure(e.to_string()));
            next_state.set(GameState::Unsupported);
        }
    }
}

/// Advance the simulation once per frame and publish its outcome.
fn run_simulation(
    time: Res<Time>,
    mut simulation: ResMut<Simulation>,
    mut input: ResMut<InputState>,
    mut status: ResMut<CurrentStatus>,
    mut events: SimEventWriters,
) {
    let outcome = simulation.tick(time.delta_secs(), &mut input);

    for event in outcome.events {
        events.send(event);
    }
    status.set_if_neq(CurrentStatus(outcome.status));
}
