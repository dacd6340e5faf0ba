use super::*;

const ALL_EASINGS: [Easing; 7] = [
    Easing::LinearEasing,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::FastOutSlowInEasing,
    Easing::LinearOutSlowInEasing,
    Easing::FastOutLinearEasing,
];

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_endpoints_are_exact() {
    for easing in ALL_EASINGS {
        assert_eq!(easing.transform(0.0), 0.0, "{easing:?} should start at 0");
        assert_eq!(easing.transform(1.0), 1.0, "{easing:?} should end at 1");
    }
}

#[test]
fn easing_clamps_out_of_range_input() {
    for easing in ALL_EASINGS {
        assert_eq!(easing.transform(-0.5), 0.0);
        assert_eq!(easing.transform(3.0), 1.0);
    }
    assert_eq!(Easing::EaseIn.transform(f32::NAN), 0.0);
}

#[test]
fn easing_curves_are_monotonic() {
    for easing in ALL_EASINGS {
        let mut prev = 0.0;
        for i in 0..=200 {
            let value = easing.transform(i as f32 / 200.0);
            assert!(
                value + 1e-5 >= prev,
                "{easing:?} decreased at step {i}: {value} < {prev}"
            );
            assert!((0.0..=1.0).contains(&value));
            prev = value;
        }
    }
}

#[test]
fn ease_in_starts_slow() {
    let quarter = Easing::EaseIn.transform(0.25);
    let half = Easing::EaseIn.transform(0.5);
    assert!(quarter < 0.25, "ease-in should lag linear, got {quarter}");
    assert!(half < 0.5, "ease-in should lag linear, got {half}");
    // Reference value of cubic-bezier(0.42, 0, 1, 1) at x = 0.5.
    assert!((half - 0.3153).abs() < 0.01, "unexpected ease-in midpoint {half}");
}

#[test]
fn default_easing_is_ease_in() {
    assert_eq!(Easing::default(), Easing::EaseIn);
    assert!(Easing::LinearEasing.curve().is_none());
}
