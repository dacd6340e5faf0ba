//! Engine ownership and lifecycle.
//!
//! [`EngineLifecycleManager`] is the only owner of the native engine. It
//! starts it on mount, follows app foreground/background transitions, and
//! stops and releases it on unmount. Every engine failure ends here: callers
//! on the scroll path only ever see a silent no-op.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::app_state::{AppState, AppStateSource, AppStateSubscription};
use crate::engine::HapticEngine;
use crate::error::{EngineError, HapticError};
use crate::pattern::HapticPattern;

/// Engine run state as tracked by the manager.
///
/// An engine whose `start()` failed stays in its previous non-running state
/// and is retried on the next foreground transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Unstarted,
    Running,
    Stopped,
}

struct EngineSlot<E> {
    engine: Option<E>,
    state: EngineState,
    released: bool,
}

impl<E: HapticEngine> EngineSlot<E> {
    fn start(&mut self) {
        if self.state == EngineState::Running {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        match engine.start() {
            Ok(()) => {
                log::debug!("haptic engine {:?} -> Running", self.state);
                self.state = EngineState::Running;
            }
            Err(err) => log::warn!("haptics unavailable: {err}"),
        }
    }

    fn stop(&mut self) {
        if self.state != EngineState::Running {
            return;
        }
        if let Some(engine) = self.engine.as_mut() {
            if let Err(err) = engine.stop() {
                log::warn!("{err}");
            }
        }
        log::debug!("haptic engine Running -> Stopped");
        self.state = EngineState::Stopped;
    }

    fn handle_app_state(&mut self, state: AppState) {
        match state {
            AppState::Active => self.start(),
            AppState::Background => self.stop(),
            AppState::Inactive => {}
        }
    }

    fn play(&mut self, pattern: &HapticPattern) -> Result<(), HapticError> {
        if self.state != EngineState::Running {
            return Err(HapticError::EngineUnavailable);
        }
        let engine = self.engine.as_mut().ok_or(HapticError::EngineUnavailable)?;
        pattern.validate()?;
        engine.play_pattern(pattern)?;
        Ok(())
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.stop();
        self.engine = None;
        self.released = true;
    }
}

/// Engine slot shared with the app-state listener.
///
/// The engine may raise an app-state transition synchronously from inside one
/// of its own calls. That transition is parked in `deferred` and applied once
/// the call returns.
struct SharedSlot<E> {
    slot: RefCell<EngineSlot<E>>,
    deferred: Cell<Option<AppState>>,
}

impl<E: HapticEngine> SharedSlot<E> {
    fn with<R>(&self, f: impl FnOnce(&mut EngineSlot<E>) -> R) -> R {
        let result = f(&mut *self.slot.borrow_mut());
        self.apply_deferred();
        result
    }

    fn notify(&self, state: AppState) {
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => slot.handle_app_state(state),
            Err(_) => {
                log::debug!("engine busy, deferring app state {state:?}");
                // Only the latest transition matters.
                self.deferred.set(Some(state));
                return;
            }
        }
        self.apply_deferred();
    }

    fn apply_deferred(&self) {
        while let Some(state) = self.deferred.take() {
            self.slot.borrow_mut().handle_app_state(state);
        }
    }
}

/// Owns a native haptic engine for one mounted component.
pub struct EngineLifecycleManager<E: HapticEngine + 'static> {
    slot: Rc<SharedSlot<E>>,
    subscription: Option<AppStateSubscription>,
}

impl<E: HapticEngine + 'static> EngineLifecycleManager<E> {
    /// Create and start the engine, then follow `app_state` transitions.
    ///
    /// A factory error leaves the manager mounted but unavailable; every
    /// later request is a no-op.
    pub fn mount(
        create_engine: impl FnOnce() -> Result<E, EngineError>,
        app_state: &dyn AppStateSource,
    ) -> Self {
        let engine = match create_engine() {
            Ok(engine) => Some(engine),
            Err(err) => {
                log::warn!("haptic engine not created: {err}");
                None
            }
        };
        let slot = Rc::new(SharedSlot {
            slot: RefCell::new(EngineSlot {
                engine,
                state: EngineState::Unstarted,
                released: false,
            }),
            deferred: Cell::new(None),
        });
        let mut manager = Self {
            slot,
            subscription: None,
        };
        manager.slot.with(EngineSlot::start);

        let weak: Weak<SharedSlot<E>> = Rc::downgrade(&manager.slot);
        manager.subscription = Some(app_state.subscribe(Box::new(move |state| {
            if let Some(slot) = weak.upgrade() {
                slot.notify(state);
            }
        })));
        manager
    }

    pub fn state(&self) -> EngineState {
        self.slot.slot.borrow().state
    }

    /// Whether a pattern played now would reach the engine.
    pub fn is_available(&self) -> bool {
        let slot = self.slot.slot.borrow();
        slot.engine.is_some() && slot.state == EngineState::Running
    }

    pub fn is_mounted(&self) -> bool {
        !self.slot.slot.borrow().released
    }

    /// Start the engine if it is not running.
    pub fn start(&self) {
        self.slot.with(EngineSlot::start);
    }

    /// Stop the engine if it is running.
    pub fn stop(&self) {
        self.slot.with(EngineSlot::stop);
    }

    pub fn handle_app_state(&self, state: AppState) {
        self.slot.with(|slot| slot.handle_app_state(state));
    }

    /// Play `pattern`, reporting why it was not played.
    pub fn try_play(&self, pattern: &HapticPattern) -> Result<(), HapticError> {
        self.slot.with(|slot| slot.play(pattern))
    }

    /// Best-effort play. Failures are logged and dropped.
    pub fn play(&self, pattern: &HapticPattern) {
        match self.try_play(pattern) {
            Ok(()) => {}
            Err(HapticError::EngineUnavailable) => {
                log::debug!("haptic engine unavailable, dropping pattern");
            }
            Err(err) => log::warn!("dropping haptic pattern: {err}"),
        }
    }

    /// Detach from app-state updates and stop and release the engine.
    ///
    /// Idempotent; also runs on drop.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.remove();
        }
        self.slot.with(EngineSlot::release);
    }
}

impl<E: HapticEngine + 'static> Drop for EngineLifecycleManager<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
