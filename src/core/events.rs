//! Events forwarded from the simulation to the presentation layer.
//!
//! The simulation reports state changes in its tick outcome; the core plugin
//! re-sends them as Bevy events so the HUD (and anything else) can react
//! without reaching into the simulation.

use bevy::prelude::*;

use crate::sim::{InteractionEvent, PearlId};

/// Sent when the craft picks up a pearl.
#[derive(Event, Debug, Clone, Copy)]
pub struct PearlCollectedEvent {
    pub pearl: PearlId,
    /// Cumulative pickups including this one
    pub total: u32,
}

/// Sent when the craft puts its pearl down.
#[derive(Event, Debug, Clone, Copy)]
pub struct PearlPlacedEvent {
    pub pearl: PearlId,
    pub position: Vec3,
}

/// Sent once, when the treasure chest opens.
#[derive(Event, Debug, Clone, Copy)]
pub struct TreasureOpenedEvent;

/// Writers for every simulation event, bundled for the tick system.
#[derive(bevy::ecs::system::SystemParam)]
pub struct SimEventWriters<'w> {
    collected: EventWriter<'w, PearlCollectedEvent>,
    placed: EventWriter<'w, PearlPlacedEvent>,
    opened: EventWriter<'w, TreasureOpenedEvent>,
}

impl SimEventWriters<'_> {
    pub fn send(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::PearlCollected { pearl, total } => {
                self.collected.send(PearlCollectedEvent { pearl, total });
            }
            InteractionEvent::PearlPlaced { pearl, position } => {
                self.placed.send(PearlPlacedEvent { pearl, position });
            }
            InteractionEvent::TreasureOpened => {
                self.opened.send(TreasureOpenedEvent);
            }
        }
    }
}
