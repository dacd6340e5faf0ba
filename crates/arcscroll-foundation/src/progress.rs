//! Raw scroll offset to pull progress.
//!
//! Scroll views report a negative content offset while the user drags past
//! the top edge. Only that upward overscroll counts as pull; regular
//! scrolling into the content always maps to zero.

use arcscroll_animation::Easing;

/// Pull distance for a raw vertical content offset. NaN maps to zero.
pub fn overscroll_distance(raw_offset_y: f32) -> f32 {
    // f32::max ignores a NaN operand.
    (-raw_offset_y).max(0.0)
}

/// Pull distance relative to `threshold`, clamped to `[0, 1]`.
///
/// A threshold that is not a positive number yields zero progress.
/// [`crate::OverscrollConfig::validate`] rejects such thresholds before any
/// controller is built.
pub fn linear_progress(raw_offset_y: f32, threshold: f32) -> f32 {
    if threshold.is_nan() || threshold <= 0.0 {
        return 0.0;
    }
    (overscroll_distance(raw_offset_y) / threshold).min(1.0)
}

/// Eased pull progress using the default ease-in curve.
pub fn overscroll_progress(raw_offset_y: f32, threshold: f32) -> f32 {
    Easing::EaseIn.transform(linear_progress(raw_offset_y, threshold))
}

/// Progress mapping bound to one threshold and curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressMapper {
    threshold: f32,
    easing: Easing,
}

impl ProgressMapper {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            easing: Easing::EaseIn,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn progress(&self, raw_offset_y: f32) -> f32 {
        self.easing
            .transform(linear_progress(raw_offset_y, self.threshold))
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
