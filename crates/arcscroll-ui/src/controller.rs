use arcscroll_animation::Easing;
use arcscroll_foundation::{
    overscroll_distance, GateEvent, GestureSampler, HysteresisGate, OverscrollConfig,
    ProgressMapper,
};
use arcscroll_haptics::{
    AppStateSource, EngineError, EngineLifecycleManager, HapticEngine, HapticError,
    HapticParameters,
};

/// State of the current drag.
///
/// One per scroll view. Offsets are stored as overscroll distance, not raw
/// content offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    sampler: GestureSampler,
    gate: HysteresisGate,
}

impl GestureSession {
    fn new(tap_distance: f32) -> Self {
        Self {
            sampler: GestureSampler::new(tap_distance),
            gate: HysteresisGate::new(),
        }
    }

    pub fn is_touching(&self) -> bool {
        self.sampler.is_touching()
    }

    pub fn last_sampled_offset(&self) -> f32 {
        self.sampler.last_sampled_offset()
    }

    pub fn has_fired(&self) -> bool {
        self.gate.has_fired()
    }
}

/// One pulse requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackPulse {
    pub event: GateEvent,
    pub progress: f32,
    pub parameters: HapticParameters,
}

/// Turns drag and scroll callbacks into haptic pulses.
///
/// All methods run on the UI thread in callback order and never block or
/// fail; engine problems only silence the pulses.
pub struct OverscrollHapticController<E: HapticEngine + 'static> {
    mapper: ProgressMapper,
    session: GestureSession,
    engine: EngineLifecycleManager<E>,
}

impl<E: HapticEngine + 'static> OverscrollHapticController<E> {
    /// Validate `config`, then create and start the engine.
    ///
    /// Configuration errors are returned before the engine factory runs.
    pub fn new(
        config: OverscrollConfig,
        create_engine: impl FnOnce() -> Result<E, EngineError>,
        app_state: &dyn AppStateSource,
    ) -> Result<Self, HapticError> {
        config.validate()?;
        log::debug!(
            "overscroll haptics: tap {} px, threshold {} px",
            config.tap_distance,
            config.refresh_distance_threshold
        );
        Ok(Self {
            mapper: ProgressMapper::new(config.refresh_distance_threshold),
            session: GestureSession::new(config.tap_distance),
            engine: EngineLifecycleManager::mount(create_engine, app_state),
        })
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.mapper = self.mapper.with_easing(easing);
        self
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn engine(&self) -> &EngineLifecycleManager<E> {
        &self.engine
    }

    pub fn on_touch_begin(&mut self) {
        if !self.engine.is_mounted() {
            return;
        }
        self.session.sampler.on_touch_begin();
        self.session.gate.reset();
    }

    pub fn on_touch_end(&mut self, raw_offset_y: f32) {
        self.session
            .sampler
            .on_touch_end(overscroll_distance(raw_offset_y));
    }

    /// Process one scroll sample; returns the pulse that was requested, if
    /// any.
    pub fn on_scroll(&mut self, raw_offset_y: f32) -> Option<FeedbackPulse> {
        let distance = overscroll_distance(raw_offset_y);
        if !self.session.sampler.should_process(distance) {
            return None;
        }
        self.session.sampler.accept(distance);

        let progress = self.mapper.progress(raw_offset_y);
        let event = self.session.gate.observe(progress)?;
        let parameters = HapticParameters::for_event(event);
        self.engine.play(&parameters.to_pattern());
        Some(FeedbackPulse {
            event,
            progress,
            parameters,
        })
    }

    /// Stop the engine and ignore all further input.
    pub fn unmount(&mut self) {
        let final_offset = self.session.last_sampled_offset();
        self.session.sampler.on_touch_end(final_offset);
        self.engine.unmount();
    }
}
