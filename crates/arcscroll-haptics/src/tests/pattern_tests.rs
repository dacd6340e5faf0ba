use super::*;

#[test]
fn transient_pattern_has_single_event_at_time_zero() {
    let pattern = HapticPattern::transient(0.25, 0.3);
    assert_eq!(pattern.events.len(), 1);
    assert!(pattern.dynamic_parameters.is_empty());

    let event = &pattern.events[0];
    assert_eq!(event.event_type, HapticEventType::Transient);
    assert_eq!(event.relative_time, 0.0);
    assert_eq!(event.parameter(HapticParameterId::Intensity), Some(0.25));
    assert_eq!(event.parameter(HapticParameterId::Sharpness), Some(0.3));
    assert_eq!(event.parameter(HapticParameterId::AttackTime), None);
    assert!(!event.parameters.spilled(), "two parameters should stay inline");
    assert!(pattern.validate().is_ok());
}

#[test]
fn raw_identifiers_round_trip() {
    for id in HapticParameterId::ALL {
        assert_eq!(HapticParameterId::from_raw(id.as_raw()), Some(*id));
    }
    for id in HapticDynamicParameterId::ALL {
        assert_eq!(HapticDynamicParameterId::from_raw(id.as_raw()), Some(*id));
    }
    for kind in HapticEventType::ALL {
        assert_eq!(HapticEventType::from_raw(kind.as_raw()), Some(*kind));
    }
}

#[test]
fn vocabulary_is_complete() {
    assert_eq!(HapticEventType::ALL.len(), 4);
    assert_eq!(HapticParameterId::ALL.len(), 10);
    assert_eq!(HapticDynamicParameterId::ALL.len(), 12);
    assert_eq!(HapticParameterId::Intensity.as_raw(), "HapticIntensity");
    assert_eq!(HapticEventType::Transient.to_string(), "HapticTransient");
}

#[test]
fn unknown_raw_identifier_is_rejected() {
    assert_eq!(HapticParameterId::from_raw("hapticIntensity"), None);
    assert_eq!(HapticEventType::from_raw(""), None);
}

#[test]
fn empty_pattern_is_invalid() {
    assert_eq!(HapticPattern::default().validate(), Err(PatternError::Empty));
}

#[test]
fn out_of_range_intensity_is_invalid() {
    let pattern = HapticPattern::transient(1.5, 0.5);
    assert_eq!(
        pattern.validate(),
        Err(PatternError::ParameterOutOfRange {
            parameter: HapticParameterId::Intensity,
            value: 1.5,
        })
    );
    assert!(HapticPattern::transient(f32::NAN, 0.5).validate().is_err());
}

#[test]
fn signed_parameters_accept_negative_values() {
    let event = HapticEvent::new(HapticEventType::Continuous, 0.1)
        .with_parameter(HapticParameterId::AttackTime, -0.5)
        .with_parameter(HapticParameterId::AudioPan, -1.0);
    let pattern = HapticPattern::transient(1.0, 1.0).with_event(event);
    assert!(pattern.validate().is_ok());
}

#[test]
fn negative_relative_time_is_invalid() {
    let event = HapticEvent::new(HapticEventType::Transient, -0.1);
    let pattern = HapticPattern::default().with_event(event);
    assert_eq!(pattern.validate(), Err(PatternError::InvalidRelativeTime(-0.1)));
}

#[test]
fn dynamic_parameters_are_validated() {
    let ok = HapticPattern::transient(0.5, 0.5).with_dynamic_parameter(
        HapticDynamicParameterId::HapticSharpnessControl,
        -0.3,
        0.05,
    );
    assert!(ok.validate().is_ok());

    let bad = HapticPattern::transient(0.5, 0.5).with_dynamic_parameter(
        HapticDynamicParameterId::HapticIntensityControl,
        -0.3,
        0.05,
    );
    assert!(matches!(
        bad.validate(),
        Err(PatternError::DynamicParameterOutOfRange { .. })
    ));
}
