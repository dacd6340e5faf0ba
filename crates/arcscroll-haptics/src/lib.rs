//! Haptic feedback for ArcScroll.
//!
//! The native engine is an opaque collaborator behind [`HapticEngine`]. This
//! crate owns the pattern vocabulary passed to it, the progress to
//! intensity mapping, and [`EngineLifecycleManager`], which keeps the engine
//! in step with mount/unmount and app foreground/background transitions.

pub mod app_state;
pub mod engine;
pub mod error;
pub mod intensity;
pub mod lifecycle;
pub mod pattern;

pub use app_state::{
    AppState, AppStateListener, AppStateRegistry, AppStateSource, AppStateSubscription,
};
pub use engine::HapticEngine;
pub use error::{EngineError, HapticError, PatternError};
pub use intensity::HapticParameters;
pub use lifecycle::{EngineLifecycleManager, EngineState};
pub use pattern::{
    HapticDynamicParameter, HapticDynamicParameterId, HapticEvent, HapticEventParameter,
    HapticEventType, HapticParameterId, HapticPattern,
};
