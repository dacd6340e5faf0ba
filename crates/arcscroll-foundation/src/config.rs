//! Embedder-facing configuration.

use crate::gesture_constants::{refresh_distance_for_screen, DEFAULT_SCREEN_HEIGHT, TAP_DISTANCE};

/// Tunables for one overscroll feedback controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverscrollConfig {
    /// Minimum pull-distance delta between processed samples.
    pub tap_distance: f32,
    /// Pull distance that maps to progress 1.0.
    pub refresh_distance_threshold: f32,
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self::for_screen_height(DEFAULT_SCREEN_HEIGHT)
    }
}

impl OverscrollConfig {
    pub fn new(tap_distance: f32, refresh_distance_threshold: f32) -> Self {
        Self {
            tap_distance,
            refresh_distance_threshold,
        }
    }

    /// Default tap distance with the refresh threshold derived from the
    /// window height.
    pub fn for_screen_height(screen_height: f32) -> Self {
        Self::new(TAP_DISTANCE, refresh_distance_for_screen(screen_height))
    }

    pub fn with_tap_distance(mut self, tap_distance: f32) -> Self {
        self.tap_distance = tap_distance;
        self
    }

    pub fn with_refresh_distance_threshold(mut self, threshold: f32) -> Self {
        self.refresh_distance_threshold = threshold;
        self
    }

    /// Reject values that would make progress mapping meaningless.
    ///
    /// A tap distance of zero is allowed and disables jitter filtering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.refresh_distance_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(threshold));
        }
        let tap = self.tap_distance;
        if !tap.is_finite() || tap < 0.0 {
            return Err(ConfigError::InvalidTapDistance(tap));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonPositiveThreshold(f32),
    InvalidTapDistance(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveThreshold(value) => {
                write!(f, "refresh distance threshold must be positive, got {value}")
            }
            ConfigError::InvalidTapDistance(value) => {
                write!(f, "tap distance must be a non-negative number, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_gesture_constants() {
        let config = OverscrollConfig::default();
        assert_eq!(config.tap_distance, 2.0);
        let expected = DEFAULT_SCREEN_HEIGHT * 0.178_111_59;
        assert!((config.refresh_distance_threshold - expected).abs() < 1e-3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_scales_with_screen_height() {
        let small = OverscrollConfig::for_screen_height(600.0);
        let large = OverscrollConfig::for_screen_height(1200.0);
        assert!((large.refresh_distance_threshold - 2.0 * small.refresh_distance_threshold).abs() < 1e-3);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = OverscrollConfig::default()
            .with_tap_distance(5.0)
            .with_refresh_distance_threshold(120.0);
        assert_eq!(config, OverscrollConfig::new(5.0, 120.0));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        for threshold in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let config = OverscrollConfig::default().with_refresh_distance_threshold(threshold);
            assert!(
                matches!(config.validate(), Err(ConfigError::NonPositiveThreshold(_))),
                "threshold {threshold} should be rejected"
            );
        }
    }

    #[test]
    fn negative_tap_distance_is_rejected() {
        let config = OverscrollConfig::default().with_tap_distance(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidTapDistance(-1.0)));
        assert!(OverscrollConfig::default().with_tap_distance(0.0).validate().is_ok());
    }
}
