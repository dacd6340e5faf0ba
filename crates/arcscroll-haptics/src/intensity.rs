//! Pull progress to pulse strength.

use arcscroll_foundation::GateEvent;

use crate::pattern::HapticPattern;

/// Below-threshold pulses top out at half strength so they never feel like
/// the commit pulse.
const CONTINUOUS_INTENSITY_SCALE: f32 = 0.5;
const BASE_SHARPNESS: f32 = 0.2;
const SHARPNESS_SCALE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticParameters {
    pub intensity: f32,
    pub sharpness: f32,
}

impl HapticParameters {
    /// The commit pulse at the refresh threshold.
    pub const FIRE: HapticParameters = HapticParameters {
        intensity: 1.0,
        sharpness: 1.0,
    };

    /// Graduated pulse while pulling towards the threshold.
    ///
    /// Sharpness starts at a 0.2 baseline and grows with progress, staying
    /// in `[0.2, 0.4)` for progress below 1.
    pub fn continuous(progress: f32) -> Self {
        Self {
            intensity: progress * CONTINUOUS_INTENSITY_SCALE,
            sharpness: BASE_SHARPNESS + progress * SHARPNESS_SCALE,
        }
    }

    pub fn for_event(event: GateEvent) -> Self {
        match event {
            GateEvent::Fire => Self::FIRE,
            GateEvent::Continuous(progress) => Self::continuous(progress),
        }
    }

    pub fn to_pattern(&self) -> HapticPattern {
        HapticPattern::transient(self.intensity, self.sharpness)
    }
}
