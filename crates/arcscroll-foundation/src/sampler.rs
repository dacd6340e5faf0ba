//! Per-drag touch state and jitter filter.

use crate::gesture_constants::TAP_DISTANCE;

/// Tracks whether a finger is down and which pull distance was last acted on.
///
/// Offsets passed in are whatever space the caller samples in; the
/// controller uses overscroll distance for both scroll samples and the
/// final touch-end offset so they stay comparable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSampler {
    tap_distance: f32,
    is_touching: bool,
    last_sampled_offset: f32,
}

impl Default for GestureSampler {
    fn default() -> Self {
        Self::new(TAP_DISTANCE)
    }
}

impl GestureSampler {
    pub fn new(tap_distance: f32) -> Self {
        Self {
            tap_distance,
            is_touching: false,
            last_sampled_offset: 0.0,
        }
    }

    pub fn tap_distance(&self) -> f32 {
        self.tap_distance
    }

    pub fn is_touching(&self) -> bool {
        self.is_touching
    }

    pub fn last_sampled_offset(&self) -> f32 {
        self.last_sampled_offset
    }

    /// Arms sampling. The last sampled offset carries over from the previous
    /// drag so a re-grab at the same spot does not pulse immediately.
    pub fn on_touch_begin(&mut self) {
        self.is_touching = true;
    }

    pub fn on_touch_end(&mut self, final_offset: f32) {
        self.is_touching = false;
        self.last_sampled_offset = final_offset;
    }

    /// Whether `candidate` moved far enough from the last accepted sample.
    ///
    /// Always false while no finger is down, which keeps momentum scrolling
    /// after release from producing feedback.
    pub fn should_process(&self, candidate: f32) -> bool {
        self.is_touching && (candidate - self.last_sampled_offset).abs() >= self.tap_distance
    }

    /// Record a sample the caller decided to act on.
    pub fn accept(&mut self, candidate: f32) {
        self.last_sampled_offset = candidate;
    }
}
