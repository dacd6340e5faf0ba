//! Lifecycle manager driven by a recording engine and a live app-state
//! registry, checking the exact call sequence the native engine sees.

use arcscroll_haptics::{
    AppState, AppStateRegistry, EngineLifecycleManager, EngineState, HapticParameters,
};
use arcscroll_testing::{EngineCall, RecordingEngine};

#[test]
fn full_lifecycle_call_sequence() {
    let registry = AppStateRegistry::default();
    let (factory, log) = RecordingEngine::factory();
    let mut manager = EngineLifecycleManager::mount(factory, &registry);

    let pulse = HapticParameters::continuous(0.5).to_pattern();
    manager.play(&pulse);
    registry.dispatch(AppState::Inactive);
    registry.dispatch(AppState::Background);
    manager.play(&pulse);
    registry.dispatch(AppState::Active);
    manager.play(&HapticParameters::FIRE.to_pattern());
    manager.unmount();

    assert_eq!(
        log.calls(),
        vec![
            EngineCall::Start,
            EngineCall::Play(pulse),
            EngineCall::Stop,
            EngineCall::Start,
            EngineCall::Play(HapticParameters::FIRE.to_pattern()),
            EngineCall::Stop,
        ]
    );
}

#[test]
fn repeated_foreground_does_not_restart() {
    let registry = AppStateRegistry::new(AppState::Background);
    let (factory, log) = RecordingEngine::factory();
    let manager = EngineLifecycleManager::mount(factory, &registry);

    registry.dispatch(AppState::Active);
    registry.dispatch(AppState::Inactive);
    registry.dispatch(AppState::Active);
    manager.start();

    assert_eq!(log.start_count(), 1);
    assert_eq!(manager.state(), EngineState::Running);
}

#[test]
fn start_is_retried_after_failure() {
    let registry = AppStateRegistry::default();
    let (factory, log) = RecordingEngine::factory();
    log.fail_next_starts(2);
    let manager = EngineLifecycleManager::mount(factory, &registry);
    assert_eq!(manager.state(), EngineState::Unstarted);

    registry.dispatch(AppState::Background);
    registry.dispatch(AppState::Active);
    assert_eq!(manager.state(), EngineState::Unstarted);
    assert_eq!(log.stop_count(), 0, "never-started engine is not stopped");

    registry.dispatch(AppState::Background);
    registry.dispatch(AppState::Active);
    assert_eq!(manager.state(), EngineState::Running);
    assert_eq!(log.start_count(), 3);
}

#[test]
fn dropping_manager_after_panic_in_caller_still_releases() {
    let registry = AppStateRegistry::default();
    let (factory, log) = RecordingEngine::factory();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _manager = EngineLifecycleManager::mount(factory, &registry);
        panic!("setup failed after mount");
    }));

    assert!(result.is_err());
    assert_eq!(registry.listener_count(), 0);
    assert_eq!(log.stop_count(), 1);
}
