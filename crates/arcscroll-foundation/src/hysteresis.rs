//! Fire-once latch around the refresh threshold.
//!
//! Below the threshold every observation yields graduated feedback. The
//! first observation at or past it fires once, then the gate stays silent
//! until progress drops back below the threshold and re-arms it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    NotFired,
    Fired,
}

/// What the gate wants played for one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateEvent {
    /// Progress reached 1.0 while armed.
    Fire,
    /// Progress below 1.0 while armed.
    Continuous(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HysteresisGate {
    state: GateState,
}

impl HysteresisGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == GateState::Fired
    }

    /// Re-arm for a new drag.
    pub fn reset(&mut self) {
        self.state = GateState::NotFired;
    }

    pub fn observe(&mut self, progress: f32) -> Option<GateEvent> {
        let saturated = progress >= 1.0;
        match (self.state, saturated) {
            (GateState::NotFired, true) => {
                self.state = GateState::Fired;
                log::debug!("overscroll threshold crossed");
                Some(GateEvent::Fire)
            }
            (GateState::NotFired, false) => Some(GateEvent::Continuous(progress)),
            (GateState::Fired, false) => {
                self.state = GateState::NotFired;
                log::trace!("gate re-armed at progress {progress}");
                None
            }
            (GateState::Fired, true) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_indices(progress: &[f32]) -> Vec<usize> {
        let mut gate = HysteresisGate::new();
        progress
            .iter()
            .enumerate()
            .filter_map(|(index, &p)| match gate.observe(p) {
                Some(GateEvent::Fire) => Some(index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn fires_once_per_crossing() {
        assert_eq!(fire_indices(&[0.5, 0.9, 1.0, 1.0, 0.8, 1.0]), vec![2, 5]);
    }

    #[test]
    fn holding_past_threshold_stays_silent() {
        let mut gate = HysteresisGate::new();
        assert_eq!(gate.observe(1.0), Some(GateEvent::Fire));
        for _ in 0..10 {
            assert_eq!(gate.observe(1.0), None);
        }
        assert!(gate.has_fired());
    }

    #[test]
    fn continuous_feedback_below_threshold() {
        let mut gate = HysteresisGate::new();
        assert_eq!(gate.observe(0.0), Some(GateEvent::Continuous(0.0)));
        assert_eq!(gate.observe(0.42), Some(GateEvent::Continuous(0.42)));
        assert_eq!(gate.state(), GateState::NotFired);
    }

    #[test]
    fn rearm_transition_emits_nothing() {
        let mut gate = HysteresisGate::new();
        gate.observe(1.0);
        assert_eq!(gate.observe(0.7), None);
        assert_eq!(gate.state(), GateState::NotFired);
        assert_eq!(gate.observe(0.6), Some(GateEvent::Continuous(0.6)));
    }

    #[test]
    fn reset_rearms_a_fired_gate() {
        let mut gate = HysteresisGate::new();
        gate.observe(1.0);
        gate.reset();
        assert!(!gate.has_fired());
        assert_eq!(gate.observe(1.0), Some(GateEvent::Fire));
    }
}
