//! Pull-to-refresh haptics for scroll views.
//!
//! [`ArcScrollView`] wraps a host scroll view's drag and scroll callbacks,
//! forwards them to the caller's own handlers, and drives an
//! [`OverscrollHapticController`] that turns the pull into haptic pulses.

mod controller;
mod scroll_view;

pub use arcscroll_animation::Easing;
pub use arcscroll_foundation::{ConfigError, GateEvent, OverscrollConfig};
pub use arcscroll_haptics::{
    AppState, AppStateRegistry, AppStateSource, EngineError, EngineLifecycleManager, EngineState,
    HapticEngine, HapticError, HapticParameters, HapticPattern,
};
pub use controller::{FeedbackPulse, GestureSession, OverscrollHapticController};
pub use scroll_view::{ArcScrollView, ScrollEvent, ScrollHandler, ScrollHandlers};
