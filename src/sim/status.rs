//! Status snapshot handed to the HUD after every tick.

use super::interaction::Hint;

/// Altitude the depth gauge reads zero at.
const DEPTH_ZERO_ALTITUDE: f32 = 10.0;
/// Gauge units per world unit below [`DEPTH_ZERO_ALTITUDE`].
const DEPTH_SCALE: f32 = 2.0;

/// Values the presentation layer displays. Cheap to compare, so the HUD
/// only rewrites text when something changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    pub depth: u32,
    pub light_percent: u32,
    pub pearls_collected: u32,
    pub treasure_opened: bool,
    pub hint: Hint,
}

impl StatusSnapshot {
    pub fn treasure_label(&self) -> &'static str {
        if self.treasure_opened {
            "Opened!"
        } else {
            "Closed"
        }
    }

    pub fn show_hint(&self) -> bool {
        self.hint.is_visible()
    }

    pub fn hint_text(&self) -> &'static str {
        self.hint.text()
    }
}

/// Depth gauge reading for a craft at altitude `y`.
pub fn depth_reading(y: f32) -> u32 {
    ((DEPTH_ZERO_ALTITUDE - y) * DEPTH_SCALE).floor().max(0.0) as u32
}
