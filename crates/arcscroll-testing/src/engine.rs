//! Engine double that records every call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use arcscroll_haptics::{EngineError, HapticEngine, HapticParameterId, HapticPattern};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Start,
    Stop,
    Play(HapticPattern),
}

#[derive(Default)]
struct LogInner {
    calls: RefCell<Vec<EngineCall>>,
    failing_starts: Cell<usize>,
    fail_plays: Cell<bool>,
}

/// Shared view of a [`RecordingEngine`]'s calls, kept by the test after the
/// engine itself has moved into the lifecycle manager.
#[derive(Clone, Default)]
pub struct EngineLog {
    inner: Rc<LogInner>,
}

impl EngineLog {
    pub fn calls(&self) -> Vec<EngineCall> {
        self.inner.calls.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner.calls.borrow_mut().clear();
    }

    pub fn start_count(&self) -> usize {
        self.count(|call| matches!(call, EngineCall::Start))
    }

    pub fn stop_count(&self) -> usize {
        self.count(|call| matches!(call, EngineCall::Stop))
    }

    pub fn plays(&self) -> Vec<HapticPattern> {
        self.inner
            .calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                EngineCall::Play(pattern) => Some(pattern.clone()),
                _ => None,
            })
            .collect()
    }

    /// `(intensity, sharpness)` of the first event of every played pattern.
    pub fn played_parameters(&self) -> Vec<(f32, f32)> {
        self.plays()
            .iter()
            .filter_map(|pattern| pattern.events.first())
            .map(|event| {
                (
                    event.parameter(HapticParameterId::Intensity).unwrap_or(0.0),
                    event.parameter(HapticParameterId::Sharpness).unwrap_or(0.0),
                )
            })
            .collect()
    }

    /// Make the next `count` calls to `start` fail.
    pub fn fail_next_starts(&self, count: usize) {
        self.inner.failing_starts.set(count);
    }

    pub fn set_fail_plays(&self, fail: bool) {
        self.inner.fail_plays.set(fail);
    }

    fn count(&self, predicate: impl Fn(&EngineCall) -> bool) -> usize {
        self.inner.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    fn push(&self, call: EngineCall) {
        log::trace!("engine call {call:?}");
        self.inner.calls.borrow_mut().push(call);
    }
}

/// Haptic engine that records calls into an [`EngineLog`].
///
/// Failed calls are recorded too, so tests can tell "attempted and failed"
/// from "never attempted".
pub struct RecordingEngine {
    log: EngineLog,
}

impl RecordingEngine {
    /// Engine plus the log its calls land in.
    pub fn with_log() -> (Self, EngineLog) {
        let log = EngineLog::default();
        (Self { log: log.clone() }, log)
    }

    /// Engine factory for `mount`, plus the log to inspect afterwards.
    pub fn factory() -> (impl FnOnce() -> Result<RecordingEngine, EngineError>, EngineLog) {
        let (engine, log) = Self::with_log();
        (move || Ok(engine), log)
    }
}

impl HapticEngine for RecordingEngine {
    fn start(&mut self) -> Result<(), EngineError> {
        self.log.push(EngineCall::Start);
        let failing = self.log.inner.failing_starts.get();
        if failing > 0 {
            self.log.inner.failing_starts.set(failing - 1);
            return Err(EngineError::Start("simulated start failure".into()));
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.log.push(EngineCall::Stop);
        Ok(())
    }

    fn play_pattern(&mut self, pattern: &HapticPattern) -> Result<(), EngineError> {
        self.log.push(EngineCall::Play(pattern.clone()));
        if self.log.inner.fail_plays.get() {
            return Err(EngineError::Player("simulated player failure".into()));
        }
        Ok(())
    }
}
