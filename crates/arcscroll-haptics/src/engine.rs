//! Seam to the native haptic engine.

use crate::error::EngineError;
use crate::pattern::HapticPattern;

/// Native haptic engine.
///
/// Implementations wrap a platform engine and must not block the calling
/// thread: `start`, `stop` and `play_pattern` only submit requests. Calling
/// `start` on a running engine must succeed without allocating a second
/// engine.
pub trait HapticEngine {
    fn start(&mut self) -> Result<(), EngineError>;

    fn stop(&mut self) -> Result<(), EngineError>;

    fn play_pattern(&mut self, pattern: &HapticPattern) -> Result<(), EngineError>;
}

impl<E: HapticEngine + ?Sized> HapticEngine for Box<E> {
    fn start(&mut self) -> Result<(), EngineError> {
        (**self).start()
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        (**self).stop()
    }

    fn play_pattern(&mut self, pattern: &HapticPattern) -> Result<(), EngineError> {
        (**self).play_pattern(pattern)
    }
}
