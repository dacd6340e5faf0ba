//! Testing utilities for ArcScroll

pub mod engine;
pub mod robot;

pub use engine::{EngineCall, EngineLog, RecordingEngine};
pub use robot::DragRobot;

pub mod prelude {
    pub use crate::engine::*;
    pub use crate::robot::*;
    pub use arcscroll_haptics::{AppState, AppStateRegistry};
}
