//! Interaction resolver - pearl pickup/placement and the treasure chest.
//!
//! Pearls move through `InWorld -> Held -> Placed`. A placed pearl is back in
//! the world and can be picked up again by a fresh interact. Only one pearl
//! can be held at a time.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_3;

use super::config::InteractionConfig;

/// Index of a pearl in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PearlId(pub usize);

/// Lifecycle of a collectible pearl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PearlState {
    /// Scattered by the factory, not yet touched.
    #[default]
    InWorld,
    /// Carried by the craft.
    Held,
    /// Put down by the player.
    Placed,
}

impl PearlState {
    /// Whether the pearl is lying in the world (visible, pickable, animated).
    pub fn is_present(self) -> bool {
        !matches!(self, PearlState::Held)
    }
}

/// A collectible pearl.
#[derive(Debug, Clone, PartialEq)]
pub struct Pearl {
    pub position: Vec3,
    /// Rotation about the vertical axis.
    pub yaw: f32,
    pub bob_phase: f32,
    /// Radians per reference tick.
    pub spin_speed: f32,
    state: PearlState,
}

impl Pearl {
    pub fn new(position: Vec3, bob_phase: f32, spin_speed: f32) -> Self {
        Self {
            position,
            yaw: 0.0,
            bob_phase,
            spin_speed,
            state: PearlState::InWorld,
        }
    }

    pub fn state(&self) -> PearlState {
        self.state
    }
}

/// All pearls plus the single-slot inventory and the pickup tally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PearlCollection {
    pearls: Vec<Pearl>,
    held: Option<PearlId>,
    collected: u32,
}

impl PearlCollection {
    pub fn new(pearls: Vec<Pearl>) -> Self {
        Self {
            pearls,
            held: None,
            collected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.pearls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pearls.is_empty()
    }

    pub fn get(&self, id: PearlId) -> Option<&Pearl> {
        self.pearls.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PearlId, &Pearl)> {
        self.pearls.iter().enumerate().map(|(i, p)| (PearlId(i), p))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pearl> {
        self.pearls.iter_mut()
    }

    /// Pearls currently lying in the world.
    pub fn present(&self) -> impl Iterator<Item = (PearlId, &Pearl)> {
        self.iter().filter(|(_, p)| p.state.is_present())
    }

    pub fn held(&self) -> Option<PearlId> {
        self.held
    }

    /// Total successful pickups. Never decreases.
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// First present pearl, in storage order, strictly within `radius`.
    ///
    /// Storage order rather than distance decides ties so the choice is
    /// reproducible for a given layout.
    pub fn find_pickup(&self, from: Vec3, radius: f32) -> Option<PearlId> {
        self.present()
            .find(|(_, p)| p.position.distance(from) < radius)
            .map(|(id, _)| id)
    }

    pub fn any_present_within(&self, from: Vec3, radius: f32) -> bool {
        self.present().any(|(_, p)| p.position.distance(from) < radius)
    }

    fn pick_up(&mut self, id: PearlId) -> bool {
        if self.held.is_some() {
            return false;
        }
        let Some(pearl) = self.pearls.get_mut(id.0) else {
            return false;
        };
        if !pearl.state.is_present() {
            return false;
        }
        pearl.state = PearlState::Held;
        self.held = Some(id);
        self.collected += 1;
        true
    }

    fn place(&mut self, at: Vec3) -> Option<PearlId> {
        let id = self.held.take()?;
        let pearl = &mut self.pearls[id.0];
        pearl.state = PearlState::Placed;
        pearl.position = at;
        Some(id)
    }

    /// Move the held pearl (if any) to `at`.
    pub(crate) fn carry(&mut self, at: Vec3) {
        if let Some(id) = self.held {
            self.pearls[id.0].position = at;
        }
    }
}

/// Position and rotation (about X) of the chest lid, relative to the chest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LidPose {
    pub offset: Vec3,
    pub tilt: f32,
}

impl LidPose {
    pub const CLOSED: LidPose = LidPose {
        offset: Vec3::new(0.0, 0.9, 0.0),
        tilt: 0.0,
    };
    pub const OPEN: LidPose = LidPose {
        offset: Vec3::new(0.0, 1.0, 0.5),
        tilt: -FRAC_PI_3,
    };
}

/// The treasure chest. Once opened it stays open.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasureChest {
    pub position: Vec3,
    opened: bool,
    lid: LidPose,
}

impl TreasureChest {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            opened: false,
            lid: LidPose::CLOSED,
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn lid(&self) -> LidPose {
        self.lid
    }

    pub fn is_near(&self, from: Vec3, radius: f32) -> bool {
        self.position.distance(from) < radius
    }

    fn open(&mut self) {
        self.opened = true;
        self.lid = LidPose::OPEN;
    }
}

/// A state change made by the resolver during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    PearlCollected { pearl: PearlId, total: u32 },
    PearlPlaced { pearl: PearlId, position: Vec3 },
    TreasureOpened,
}

/// Interact trigger: put down the held pearl, or pick up a nearby one.
pub fn interact(
    pearls: &mut PearlCollection,
    craft_position: Vec3,
    config: &InteractionConfig,
) -> Option<InteractionEvent> {
    if pearls.held().is_some() {
        let at = craft_position + Vec3::from(config.place_offset);
        let pearl = pearls.place(at)?;
        info!("Placed pearl {} at {}", pearl.0, at);
        return Some(InteractionEvent::PearlPlaced { pearl, position: at });
    }

    let pearl = pearls.find_pickup(craft_position, config.pickup_radius)?;
    if !pearls.pick_up(pearl) {
        return None;
    }
    info!("Collected pearl {} ({} total)", pearl.0, pearls.collected());
    Some(InteractionEvent::PearlCollected {
        pearl,
        total: pearls.collected(),
    })
}

/// Activate trigger: open the chest if the craft is close and it is shut.
pub fn activate(
    chest: &mut TreasureChest,
    craft_position: Vec3,
    config: &InteractionConfig,
) -> Option<InteractionEvent> {
    if chest.is_open() || !chest.is_near(craft_position, config.treasure_radius) {
        return None;
    }
    chest.open();
    info!("Treasure chest opened");
    Some(InteractionEvent::TreasureOpened)
}

/// Which interaction hint the HUD should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hint {
    #[default]
    None,
    /// The chest is in reach and still closed.
    Treasure,
    /// A pearl is somewhere close.
    Nearby,
}

impl Hint {
    pub fn is_visible(self) -> bool {
        self != Hint::None
    }

    pub fn text(self) -> &'static str {
        match self {
            Hint::None => "",
            Hint::Treasure => "Press Space to open the treasure chest",
            Hint::Nearby => "A pearl glimmers nearby - click to collect it",
        }
    }
}

/// Pick the hint for the craft's current surroundings.
pub fn select_hint(
    pearls: &PearlCollection,
    chest: &TreasureChest,
    craft_position: Vec3,
    config: &InteractionConfig,
) -> Hint {
    if chest.is_near(craft_position, config.treasure_radius) && !chest.is_open() {
        Hint::Treasure
    } else if pearls.any_present_within(craft_position, config.hint_radius) {
        Hint::Nearby
    } else {
        Hint::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pearls_at(positions: &[Vec3]) -> PearlCollection {
        PearlCollection::new(positions.iter().map(|p| Pearl::new(*p, 0.0, 0.0)).collect())
    }

    #[test]
    fn pickup_within_radius() {
        let config = InteractionConfig::default();
        let mut pearls = pearls_at(&[Vec3::new(2.0, 0.0, 0.0)]);

        let event = interact(&mut pearls, Vec3::ZERO, &config);

        assert_eq!(
            event,
            Some(InteractionEvent::PearlCollected { pearl: PearlId(0), total: 1 })
        );
        assert_eq!(pearls.collected(), 1);
        assert_eq!(pearls.held(), Some(PearlId(0)));
        assert_eq!(pearls.present().count(), 0);
    }

    #[test]
    fn nothing_in_reach_does_nothing() {
        let config = InteractionConfig::default();
        let mut pearls = pearls_at(&[Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 8.0, 0.0)]);

        assert_eq!(interact(&mut pearls, Vec3::ZERO, &config), None);
        assert_eq!(pearls.collected(), 0);
        assert_eq!(pearls.held(), None);
    }

    #[test]
    fn pick_up_then_place_round_trip() {
        let config = InteractionConfig::default();
        let mut pearls = pearls_at(&[Vec3::new(1.0, 0.0, 1.0), Vec3::new(30.0, 0.0, 0.0)]);
        let craft = Vec3::new(0.0, 1.0, 0.0);

        interact(&mut pearls, craft, &config);
        assert_eq!(pearls.present().count(), 1);
        assert!(pearls.held().is_some());

        let event = interact(&mut pearls, craft, &config);
        let expected = craft + Vec3::new(0.0, -2.0, 0.0);
        assert_eq!(
            event,
            Some(InteractionEvent::PearlPlaced { pearl: PearlId(0), position: expected })
        );
        assert_eq!(pearls.present().count(), 2);
        assert_eq!(pearls.held(), None);
        assert_eq!(pearls.collected(), 1);

        let placed = pearls.get(PearlId(0)).unwrap();
        assert_eq!(placed.state(), PearlState::Placed);
        assert_eq!(placed.position, expected);
    }

    #[test]
    fn placed_pearl_can_be_collected_again() {
        let config = InteractionConfig::default();
        let mut pearls = pearls_at(&[Vec3::ZERO]);

        interact(&mut pearls, Vec3::ZERO, &config);
        interact(&mut pearls, Vec3::ZERO, &config);
        interact(&mut pearls, Vec3::ZERO, &config);

        assert_eq!(pearls.held(), Some(PearlId(0)));
        assert_eq!(pearls.collected(), 2);
    }

    #[test]
    fn first_pearl_in_storage_order_wins() {
        let config = InteractionConfig::default();
        // The second pearl is nearer but the first is enumerated first.
        let layout = [Vec3::new(2.5, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)];

        for _ in 0..5 {
            let mut pearls = pearls_at(&layout);
            interact(&mut pearls, Vec3::ZERO, &config);
            assert_eq!(pearls.held(), Some(PearlId(0)));
        }
    }

    #[test]
    fn carried_pearl_follows_craft() {
        let mut pearls = pearls_at(&[Vec3::ZERO]);
        pearls.carry(Vec3::ONE);
        assert_eq!(pearls.get(PearlId(0)).unwrap().position, Vec3::ZERO);

        interact(&mut pearls, Vec3::ZERO, &InteractionConfig::default());
        pearls.carry(Vec3::ONE);
        assert_eq!(pearls.get(PearlId(0)).unwrap().position, Vec3::ONE);
    }

    #[test]
    fn chest_opens_only_when_close() {
        let config = InteractionConfig::default();
        let mut chest = TreasureChest::new(Vec3::new(15.0, -8.0, 10.0));

        assert_eq!(activate(&mut chest, Vec3::new(15.0, -8.0, 0.0), &config), None);
        assert!(!chest.is_open());
        assert_eq!(chest.lid(), LidPose::CLOSED);

        let event = activate(&mut chest, Vec3::new(15.0, -8.0, 6.0), &config);
        assert_eq!(event, Some(InteractionEvent::TreasureOpened));
        assert!(chest.is_open());
        assert_eq!(chest.lid(), LidPose::OPEN);
    }

    #[test]
    fn activating_open_chest_is_idempotent() {
        let config = InteractionConfig::default();
        let mut chest = TreasureChest::new(Vec3::ZERO);
        activate(&mut chest, Vec3::ZERO, &config);
        let before = chest.clone();

        assert_eq!(activate(&mut chest, Vec3::ZERO, &config), None);
        assert_eq!(activate(&mut chest, Vec3::new(100.0, 0.0, 0.0), &config), None);
        assert_eq!(chest, before);
    }

    #[test]
    fn hint_prefers_treasure_then_pearls() {
        let config = InteractionConfig::default();
        let mut chest = TreasureChest::new(Vec3::ZERO);
        let pearls = pearls_at(&[Vec3::new(0.0, 0.0, 30.0)]);

        assert_eq!(select_hint(&pearls, &chest, Vec3::new(10.0, 0.0, 0.0), &config), Hint::None);
        assert_eq!(select_hint(&pearls, &chest, Vec3::new(4.0, 0.0, 0.0), &config), Hint::Treasure);
        assert_eq!(select_hint(&pearls, &chest, Vec3::new(0.0, 0.0, 22.0), &config), Hint::Nearby);

        activate(&mut chest, Vec3::ZERO, &config);
        assert_eq!(select_hint(&pearls, &chest, Vec3::new(4.0, 0.0, 0.0), &config), Hint::None);
    }

    #[test]
    fn held_pearl_does_not_trigger_hint() {
        let config = InteractionConfig::default();
        let chest = TreasureChest::new(Vec3::new(100.0, 0.0, 0.0));
        let mut pearls = pearls_at(&[Vec3::ZERO]);

        assert_eq!(select_hint(&pearls, &chest, Vec3::ZERO, &config), Hint::Nearby);
        interact(&mut pearls, Vec3::ZERO, &config);
        assert_eq!(select_hint(&pearls, &chest, Vec3::ZERO, &config), Hint::None);
    }
}
