//! Scripted drags against a mounted [`ArcScrollView`].
//!
//! The robot plays the part of the host: it owns the app-state registry,
//! mounts the view with a [`RecordingEngine`], and feeds it drag and scroll
//! callbacks in order, collecting every pulse the controller requests.

use std::cell::RefCell;
use std::rc::Rc;

use arcscroll_foundation::{GateEvent, OverscrollConfig};
use arcscroll_haptics::{AppState, AppStateRegistry, HapticError};
use arcscroll_ui::{ArcScrollView, FeedbackPulse, ScrollEvent, ScrollHandlers};

use crate::engine::{EngineLog, RecordingEngine};

pub struct DragRobot {
    view: ArcScrollView<RecordingEngine>,
    app_state: AppStateRegistry,
    engine_log: EngineLog,
    pulses: Vec<FeedbackPulse>,
    handler_log: Rc<RefCell<Vec<String>>>,
}

impl DragRobot {
    pub fn new(config: OverscrollConfig) -> Result<Self, HapticError> {
        Self::with_engine_log(config, |_| {})
    }

    /// Mount with a chance to script the engine before it is started.
    pub fn with_engine_log(
        config: OverscrollConfig,
        prepare: impl FnOnce(&EngineLog),
    ) -> Result<Self, HapticError> {
        let app_state = AppStateRegistry::default();
        let (factory, engine_log) = RecordingEngine::factory();
        prepare(&engine_log);

        let handler_log = Rc::new(RefCell::new(Vec::new()));
        let handlers = recording_handlers(&handler_log);
        let view = ArcScrollView::mount(config, handlers, factory, &app_state)?;
        Ok(Self {
            view,
            app_state,
            engine_log,
            pulses: Vec::new(),
            handler_log,
        })
    }

    pub fn begin_drag(&mut self, content_offset_y: f32) -> &mut Self {
        self.view
            .on_scroll_begin_drag(&ScrollEvent::at(content_offset_y));
        self
    }

    pub fn scroll_to(&mut self, content_offset_y: f32) -> Option<FeedbackPulse> {
        let pulse = self.view.on_scroll(&ScrollEvent::at(content_offset_y));
        if let Some(pulse) = pulse {
            self.pulses.push(pulse);
        }
        pulse
    }

    /// Scroll through `offsets`, returning the pulse (or none) for each.
    pub fn scroll_through(&mut self, offsets: &[f32]) -> Vec<Option<FeedbackPulse>> {
        offsets.iter().map(|&offset| self.scroll_to(offset)).collect()
    }

    pub fn end_drag(&mut self, content_offset_y: f32) -> &mut Self {
        self.view.on_scroll_end_drag(&ScrollEvent::at(content_offset_y));
        self
    }

    /// Begin a drag at rest, pull through `offsets`, and release at the last
    /// one.
    pub fn pull(&mut self, offsets: &[f32]) -> Vec<Option<FeedbackPulse>> {
        self.begin_drag(0.0);
        let pulses = self.scroll_through(offsets);
        self.end_drag(offsets.last().copied().unwrap_or(0.0));
        pulses
    }

    pub fn set_app_state(&mut self, state: AppState) -> &mut Self {
        self.app_state.dispatch(state);
        self
    }

    pub fn unmount(&mut self) -> &mut Self {
        self.view.unmount();
        self
    }

    pub fn view(&self) -> &ArcScrollView<RecordingEngine> {
        &self.view
    }

    pub fn app_state(&self) -> &AppStateRegistry {
        &self.app_state
    }

    pub fn engine_log(&self) -> &EngineLog {
        &self.engine_log
    }

    pub fn pulses(&self) -> &[FeedbackPulse] {
        &self.pulses
    }

    pub fn fire_count(&self) -> usize {
        self.pulses
            .iter()
            .filter(|pulse| pulse.event == GateEvent::Fire)
            .count()
    }

    /// Caller handler invocations, e.g. `"scroll -40"`.
    pub fn handler_calls(&self) -> Vec<String> {
        self.handler_log.borrow().clone()
    }
}

fn recording_handlers(log: &Rc<RefCell<Vec<String>>>) -> ScrollHandlers {
    let begin = Rc::clone(log);
    let end = Rc::clone(log);
    let scroll = Rc::clone(log);
    ScrollHandlers::new()
        .on_scroll_begin_drag(move |event| {
            begin
                .borrow_mut()
                .push(format!("begin {}", event.content_offset_y))
        })
        .on_scroll_end_drag(move |event| {
            end.borrow_mut()
                .push(format!("end {}", event.content_offset_y))
        })
        .on_scroll(move |event| {
            scroll
                .borrow_mut()
                .push(format!("scroll {}", event.content_offset_y))
        })
}
