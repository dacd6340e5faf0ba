use super::*;

#[test]
fn downward_scroll_counts_as_no_pull() {
    assert_eq!(overscroll_distance(0.0), 0.0);
    assert_eq!(overscroll_distance(250.0), 0.0);
    assert_eq!(overscroll_distance(-42.0), 42.0);
    assert_eq!(overscroll_distance(f32::NAN), 0.0);
    assert_eq!(overscroll_progress(180.0, 100.0), 0.0);
}

#[test]
fn progress_is_zero_at_rest() {
    assert_eq!(overscroll_progress(0.0, 100.0), 0.0);
    assert_eq!(overscroll_progress(-0.0, 166.0), 0.0);
}

#[test]
fn progress_saturates_at_threshold() {
    for pull in [100.0, 100.5, 150.0, 10_000.0] {
        assert_eq!(overscroll_progress(-pull, 100.0), 1.0, "pull {pull}");
    }
}

#[test]
fn progress_is_bounded_and_monotonic() {
    for threshold in [1.0, 37.5, 100.0, 166.0] {
        let mut prev = 0.0;
        for step in 0..=400 {
            let pull = step as f32 * threshold / 200.0;
            let progress = overscroll_progress(-pull, threshold);
            assert!((0.0..=1.0).contains(&progress), "out of range: {progress}");
            assert!(
                progress + 1e-5 >= prev,
                "progress decreased at pull {pull} (threshold {threshold})"
            );
            prev = progress;
        }
    }
}

#[test]
fn linear_progress_is_clamped_ratio() {
    assert_eq!(linear_progress(-25.0, 100.0), 0.25);
    assert_eq!(linear_progress(-300.0, 100.0), 1.0);
}

#[test]
fn non_positive_threshold_yields_no_progress() {
    assert_eq!(linear_progress(-50.0, 0.0), 0.0);
    assert_eq!(linear_progress(-50.0, -10.0), 0.0);
    assert_eq!(overscroll_progress(-50.0, f32::NAN), 0.0);
}

#[test]
fn eased_progress_lags_linear_progress() {
    let eased = overscroll_progress(-50.0, 100.0);
    assert!(eased < 0.5);
    assert!(eased > 0.0);
}

#[test]
fn mapper_uses_configured_curve() {
    let mapper = ProgressMapper::new(200.0);
    assert_eq!(mapper.threshold(), 200.0);
    assert_eq!(mapper.easing(), Easing::EaseIn);
    assert_eq!(mapper.progress(-100.0), overscroll_progress(-100.0, 200.0));

    let linear = mapper.with_easing(Easing::LinearEasing);
    assert_eq!(linear.progress(-100.0), 0.5);
    assert_eq!(linear.progress(-400.0), 1.0);
}
