//! Haptic pattern vocabulary understood by the native engine.
//!
//! Event types and parameter identifiers are closed enums. Each maps to the
//! raw identifier string the platform uses, so a bridge can translate without
//! string matching anywhere else.

use smallvec::{smallvec, SmallVec};
use std::ops::RangeInclusive;

use crate::error::PatternError;

macro_rules! raw_identifier_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $raw:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Platform identifier for this value.
            pub const fn as_raw(&self) -> &'static str {
                match self {
                    $($name::$variant => $raw,)+
                }
            }

            pub fn from_raw(raw: &str) -> Option<Self> {
                match raw {
                    $($raw => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_raw())
            }
        }
    };
}

raw_identifier_enum! {
    pub enum HapticEventType {
        Transient => "HapticTransient",
        Continuous => "HapticContinuous",
        AudioContinuous => "AudioContinuous",
        AudioCustom => "AudioCustom",
    }
}

raw_identifier_enum! {
    /// Static per-event parameters.
    pub enum HapticParameterId {
        Intensity => "HapticIntensity",
        Sharpness => "HapticSharpness",
        AttackTime => "AttackTime",
        DecayTime => "DecayTime",
        ReleaseTime => "ReleaseTime",
        Sustained => "Sustained",
        AudioVolume => "AudioVolume",
        AudioPitch => "AudioPitch",
        AudioPan => "AudioPan",
        AudioBrightness => "AudioBrightness",
    }
}

raw_identifier_enum! {
    /// Parameters that modulate a pattern while it plays.
    pub enum HapticDynamicParameterId {
        HapticIntensityControl => "HapticIntensityControl",
        HapticSharpnessControl => "HapticSharpnessControl",
        HapticAttackTimeControl => "HapticAttackTimeControl",
        HapticDecayTimeControl => "HapticDecayTimeControl",
        HapticReleaseTimeControl => "HapticReleaseTimeControl",
        AudioVolumeControl => "AudioVolumeControl",
        AudioPitchControl => "AudioPitchControl",
        AudioPanControl => "AudioPanControl",
        AudioBrightnessControl => "AudioBrightnessControl",
        AudioAttackTimeControl => "AudioAttackTimeControl",
        AudioDecayTimeControl => "AudioDecayTimeControl",
        AudioReleaseTimeControl => "AudioReleaseTimeControl",
    }
}

impl HapticParameterId {
    /// Values the engine accepts for this parameter.
    pub fn valid_range(&self) -> RangeInclusive<f32> {
        match self {
            HapticParameterId::AttackTime
            | HapticParameterId::DecayTime
            | HapticParameterId::AudioPitch
            | HapticParameterId::AudioPan => -1.0..=1.0,
            _ => 0.0..=1.0,
        }
    }
}

impl HapticDynamicParameterId {
    /// Dynamic parameters are offsets applied on top of the event values.
    pub fn valid_range(&self) -> RangeInclusive<f32> {
        match self {
            HapticDynamicParameterId::HapticIntensityControl
            | HapticDynamicParameterId::AudioVolumeControl => 0.0..=1.0,
            _ => -1.0..=1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticEventParameter {
    pub parameter_id: HapticParameterId,
    pub value: f32,
}

impl HapticEventParameter {
    pub fn new(parameter_id: HapticParameterId, value: f32) -> Self {
        Self {
            parameter_id,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HapticEvent {
    pub event_type: HapticEventType,
    pub parameters: SmallVec<[HapticEventParameter; 2]>,
    /// Seconds from pattern start.
    pub relative_time: f64,
}

impl HapticEvent {
    pub fn new(event_type: HapticEventType, relative_time: f64) -> Self {
        Self {
            event_type,
            parameters: SmallVec::new(),
            relative_time,
        }
    }

    pub fn with_parameter(mut self, parameter_id: HapticParameterId, value: f32) -> Self {
        self.parameters
            .push(HapticEventParameter::new(parameter_id, value));
        self
    }

    pub fn parameter(&self, parameter_id: HapticParameterId) -> Option<f32> {
        self.parameters
            .iter()
            .find(|param| param.parameter_id == parameter_id)
            .map(|param| param.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HapticDynamicParameter {
    pub parameter_id: HapticDynamicParameterId,
    pub value: f32,
    pub relative_time: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HapticPattern {
    pub events: SmallVec<[HapticEvent; 1]>,
    pub dynamic_parameters: Vec<HapticDynamicParameter>,
}

impl HapticPattern {
    /// One transient tap at time zero, no dynamic parameters.
    pub fn transient(intensity: f32, sharpness: f32) -> Self {
        let event = HapticEvent::new(HapticEventType::Transient, 0.0)
            .with_parameter(HapticParameterId::Intensity, intensity)
            .with_parameter(HapticParameterId::Sharpness, sharpness);
        Self {
            events: smallvec![event],
            dynamic_parameters: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: HapticEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_dynamic_parameter(
        mut self,
        parameter_id: HapticDynamicParameterId,
        value: f32,
        relative_time: f64,
    ) -> Self {
        self.dynamic_parameters.push(HapticDynamicParameter {
            parameter_id,
            value,
            relative_time,
        });
        self
    }

    /// Check every value against the ranges the engine accepts.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.events.is_empty() {
            return Err(PatternError::Empty);
        }
        for event in &self.events {
            check_relative_time(event.relative_time)?;
            for param in &event.parameters {
                if !param.parameter_id.valid_range().contains(&param.value) {
                    return Err(PatternError::ParameterOutOfRange {
                        parameter: param.parameter_id,
                        value: param.value,
                    });
                }
            }
        }
        for param in &self.dynamic_parameters {
            check_relative_time(param.relative_time)?;
            if !param.parameter_id.valid_range().contains(&param.value) {
                return Err(PatternError::DynamicParameterOutOfRange {
                    parameter: param.parameter_id,
                    value: param.value,
                });
            }
        }
        Ok(())
    }
}

fn check_relative_time(time: f64) -> Result<(), PatternError> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(PatternError::InvalidRelativeTime(time))
    }
}

#[cfg(test)]
#[path = "tests/pattern_tests.rs"]
mod tests;
