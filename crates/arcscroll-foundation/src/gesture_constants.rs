//! Shared gesture constants for overscroll feedback.
//!
//! All distances are in logical pixels. They are not scaled by display
//! density; a pull of N logical pixels feels the same on every screen.

/// Minimum change in pull distance before a new scroll sample is processed.
///
/// Larger values space the pulses out and give each one more texture:
/// - 2-3 feels like stretching a rubber band
/// - 5-10 feels like a ratchet or gear
///
/// Samples closer together than this are treated as finger jitter and never
/// reach the hysteresis gate or the haptic engine.
pub const TAP_DISTANCE: f32 = 2.0;

/// Fraction of the screen height the user has to pull to reach the refresh
/// point.
///
/// Tuned by hand on a 932pt tall phone, where it works out to roughly 166pt.
/// Hosts that know their refresh control's real trigger distance should pass
/// it through [`crate::OverscrollConfig::with_refresh_distance_threshold`].
pub const REFRESH_DISTANCE_SCREEN_RATIO: f32 = 0.178_111_59;

/// Screen height used when the host does not report one.
pub const DEFAULT_SCREEN_HEIGHT: f32 = 932.0;

/// Refresh distance for a screen of the given height.
pub fn refresh_distance_for_screen(screen_height: f32) -> f32 {
    screen_height * REFRESH_DISTANCE_SCREEN_RATIO
}
