//! App foreground/background notifications.
//!
//! The host platform owns the real signal. It forwards transitions into an
//! [`AppStateRegistry`] (or its own [`AppStateSource`]), and listeners hold
//! an [`AppStateSubscription`] that detaches them when removed or dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    Active,
    /// Transitional state (e.g. app switcher visible). Listeners usually
    /// ignore it.
    Inactive,
    Background,
}

pub type AppStateListener = Box<dyn FnMut(AppState)>;

/// Anything that can deliver app-state transitions.
pub trait AppStateSource {
    fn subscribe(&self, listener: AppStateListener) -> AppStateSubscription;
}

/// Handle keeping an app-state listener attached.
pub struct AppStateSubscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl AppStateSubscription {
    pub fn new(remove: impl FnOnce() + 'static) -> Self {
        Self {
            remove: Some(Box::new(remove)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn inactive() -> Self {
        Self { remove: None }
    }

    pub fn is_active(&self) -> bool {
        self.remove.is_some()
    }

    pub fn remove(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl Drop for AppStateSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for AppStateSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStateSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

type SharedListener = Rc<RefCell<AppStateListener>>;

struct RegistryInner {
    next_id: Cell<u64>,
    current: Cell<AppState>,
    listeners: RefCell<Vec<(u64, SharedListener)>>,
}

/// In-process app-state source the platform layer pushes transitions into.
///
/// Listeners are notified only when the state actually changes, in
/// subscription order.
#[derive(Clone)]
pub struct AppStateRegistry {
    inner: Rc<RegistryInner>,
}

impl Default for AppStateRegistry {
    fn default() -> Self {
        Self::new(AppState::Active)
    }
}

impl AppStateRegistry {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Rc::new(RegistryInner {
                next_id: Cell::new(1),
                current: Cell::new(initial),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn current(&self) -> AppState {
        self.inner.current.get()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Record a platform transition and notify listeners if it changed the
    /// state.
    pub fn dispatch(&self, state: AppState) {
        if self.inner.current.replace(state) == state {
            return;
        }
        log::debug!("app state -> {state:?}");
        // Snapshot so listeners may unsubscribe while being notified.
        let listeners: Vec<SharedListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            match listener.try_borrow_mut() {
                Ok(mut listener) => (*listener)(state),
                Err(_) => log::warn!("skipping re-entrant app state dispatch to {state:?}"),
            }
        }
    }
}

impl AppStateSource for AppStateRegistry {
    fn subscribe(&self, listener: AppStateListener) -> AppStateSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));

        let inner: Weak<RegistryInner> = Rc::downgrade(&self.inner);
        AppStateSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .listeners
                    .borrow_mut()
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}
