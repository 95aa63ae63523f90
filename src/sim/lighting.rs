//! Spotlight intensity control.

pub const MIN_INTENSITY: f32 = 0.2;
pub const MAX_INTENSITY: f32 = 2.0;
pub const INTENSITY_STEP: f32 = 0.2;

/// Multiplier applied to the craft's spotlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingState {
    intensity: f32,
}

impl Default for LightingState {
    fn default() -> Self {
        Self { intensity: 1.0 }
    }
}

impl LightingState {
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn dim(&mut self) {
        self.intensity = (self.intensity - INTENSITY_STEP).clamp(MIN_INTENSITY, MAX_INTENSITY);
    }

    pub fn brighten(&mut self) {
        self.intensity = (self.intensity + INTENSITY_STEP).clamp(MIN_INTENSITY, MAX_INTENSITY);
    }

    /// Light power shown to the player (50 at the default intensity).
    pub fn percentage(&self) -> u32 {
        // Absorb float drift from repeated steps.
        (self.intensity * 50.0 + 1e-3).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_stays_in_bounds() {
        let mut light = LightingState::default();
        let pattern = [true, true, false, true, true, true, true, true, false, false];
        for round in 0..40 {
            for &up in &pattern {
                if up ^ (round % 3 == 0) {
                    light.brighten();
                } else {
                    light.dim();
                }
                assert!((MIN_INTENSITY..=MAX_INTENSITY).contains(&light.intensity()));
            }
        }
    }

    #[test]
    fn saturates_at_both_ends() {
        let mut light = LightingState::default();
        for _ in 0..20 {
            light.dim();
        }
        assert_eq!(light.intensity(), MIN_INTENSITY);
        assert_eq!(light.percentage(), 10);

        for _ in 0..20 {
            light.brighten();
        }
        assert_eq!(light.intensity(), MAX_INTENSITY);
        assert_eq!(light.percentage(), 100);
    }

    #[test]
    fn default_power_is_fifty_percent() {
        let mut light = LightingState::default();
        assert_eq!(light.percentage(), 50);
        light.brighten();
        assert_eq!(light.percentage(), 60);
    }
}
