//! Scroll view wrapper that adds overscroll haptics on top of the caller's
//! own scroll callbacks.

use arcscroll_foundation::OverscrollConfig;
use arcscroll_haptics::{AppStateSource, EngineError, HapticEngine, HapticError};

use crate::controller::{FeedbackPulse, OverscrollHapticController};

/// Payload of the host scroll view's drag and scroll callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEvent {
    /// Vertical content offset; negative while overscrolled past the top.
    pub content_offset_y: f32,
}

impl ScrollEvent {
    pub fn at(content_offset_y: f32) -> Self {
        Self { content_offset_y }
    }
}

pub type ScrollHandler = Box<dyn FnMut(&ScrollEvent)>;

/// Caller-supplied scroll callbacks. Each one keeps firing exactly as it
/// would on the bare scroll view.
#[derive(Default)]
pub struct ScrollHandlers {
    on_scroll_begin_drag: Option<ScrollHandler>,
    on_scroll_end_drag: Option<ScrollHandler>,
    on_scroll: Option<ScrollHandler>,
}

impl ScrollHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll_begin_drag(mut self, handler: impl FnMut(&ScrollEvent) + 'static) -> Self {
        self.on_scroll_begin_drag = Some(Box::new(handler));
        self
    }

    pub fn on_scroll_end_drag(mut self, handler: impl FnMut(&ScrollEvent) + 'static) -> Self {
        self.on_scroll_end_drag = Some(Box::new(handler));
        self
    }

    pub fn on_scroll(mut self, handler: impl FnMut(&ScrollEvent) + 'static) -> Self {
        self.on_scroll = Some(Box::new(handler));
        self
    }
}

fn call(handler: &mut Option<ScrollHandler>, event: &ScrollEvent) {
    if let Some(handler) = handler.as_mut() {
        handler(event);
    }
}

/// Pull-to-refresh scroll view with haptic feedback.
///
/// The host calls `mount` when the view appears, routes its scroll
/// callbacks here, and calls `unmount` (or drops the view) when it goes
/// away.
pub struct ArcScrollView<E: HapticEngine + 'static> {
    controller: OverscrollHapticController<E>,
    handlers: ScrollHandlers,
}

impl<E: HapticEngine + 'static> ArcScrollView<E> {
    pub fn mount(
        config: OverscrollConfig,
        handlers: ScrollHandlers,
        create_engine: impl FnOnce() -> Result<E, EngineError>,
        app_state: &dyn AppStateSource,
    ) -> Result<Self, HapticError> {
        let controller = OverscrollHapticController::new(config, create_engine, app_state)?;
        Ok(Self {
            controller,
            handlers,
        })
    }

    pub fn controller(&self) -> &OverscrollHapticController<E> {
        &self.controller
    }

    pub fn on_scroll_begin_drag(&mut self, event: &ScrollEvent) {
        // Haptics follow the finger; arm before anything else sees the drag.
        self.controller.on_touch_begin();
        call(&mut self.handlers.on_scroll_begin_drag, event);
    }

    pub fn on_scroll_end_drag(&mut self, event: &ScrollEvent) {
        self.controller.on_touch_end(event.content_offset_y);
        call(&mut self.handlers.on_scroll_end_drag, event);
    }

    pub fn on_scroll(&mut self, event: &ScrollEvent) -> Option<FeedbackPulse> {
        call(&mut self.handlers.on_scroll, event);
        self.controller.on_scroll(event.content_offset_y)
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }
}
