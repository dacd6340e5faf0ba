//! Signal processing for overscroll haptics: turns a stream of raw scroll
//! offsets into gated feedback decisions.

pub mod config;
pub mod gesture_constants;
pub mod hysteresis;
pub mod progress;
pub mod sampler;

pub use arcscroll_animation::Easing;
pub use config::{ConfigError, OverscrollConfig};
pub use gesture_constants::{
    refresh_distance_for_screen, DEFAULT_SCREEN_HEIGHT, REFRESH_DISTANCE_SCREEN_RATIO,
    TAP_DISTANCE,
};
pub use hysteresis::{GateEvent, GateState, HysteresisGate};
pub use progress::{linear_progress, overscroll_distance, overscroll_progress, ProgressMapper};
pub use sampler::GestureSampler;
