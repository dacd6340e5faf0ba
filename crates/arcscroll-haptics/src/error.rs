use arcscroll_foundation::ConfigError;

use crate::pattern::{HapticDynamicParameterId, HapticParameterId};

/// Failure reported by a native engine implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The device has no haptic hardware or the engine could not be created.
    Unsupported,
    /// A pattern was played before the engine was started.
    NotStarted,
    Start(String),
    Stop(String),
    Player(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Unsupported => write!(f, "haptics are not supported on this device"),
            EngineError::NotStarted => write!(f, "haptic engine is not started"),
            EngineError::Start(reason) => write!(f, "haptic engine failed to start: {reason}"),
            EngineError::Stop(reason) => write!(f, "haptic engine failed to stop: {reason}"),
            EngineError::Player(reason) => write!(f, "haptic pattern player failed: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Why a [`crate::HapticPattern`] was refused before reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternError {
    Empty,
    ParameterOutOfRange {
        parameter: HapticParameterId,
        value: f32,
    },
    DynamicParameterOutOfRange {
        parameter: HapticDynamicParameterId,
        value: f32,
    },
    InvalidRelativeTime(f64),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::Empty => write!(f, "pattern has no events"),
            PatternError::ParameterOutOfRange { parameter, value } => {
                write!(f, "{} value {value} is out of range", parameter.as_raw())
            }
            PatternError::DynamicParameterOutOfRange { parameter, value } => {
                write!(f, "{} value {value} is out of range", parameter.as_raw())
            }
            PatternError::InvalidRelativeTime(time) => {
                write!(f, "relative time {time} must be a non-negative number")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Error taxonomy exposed to embedders.
///
/// Only [`HapticError::Configuration`] ever escapes to the host, at
/// construction time. Everything else is logged and swallowed at the
/// lifecycle manager so scrolling never sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum HapticError {
    /// The engine could not be created or started, or has been released.
    EngineUnavailable,
    InvalidPattern(PatternError),
    Configuration(ConfigError),
    /// The engine was running but rejected a request.
    Engine(EngineError),
}

impl std::fmt::Display for HapticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticError::EngineUnavailable => write!(f, "haptic engine unavailable"),
            HapticError::InvalidPattern(err) => write!(f, "invalid haptic pattern: {err}"),
            HapticError::Configuration(err) => write!(f, "invalid configuration: {err}"),
            HapticError::Engine(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for HapticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HapticError::EngineUnavailable => None,
            HapticError::InvalidPattern(err) => Some(err),
            HapticError::Configuration(err) => Some(err),
            HapticError::Engine(err) => Some(err),
        }
    }
}

impl From<ConfigError> for HapticError {
    fn from(err: ConfigError) -> Self {
        HapticError::Configuration(err)
    }
}

impl From<PatternError> for HapticError {
    fn from(err: PatternError) -> Self {
        HapticError::InvalidPattern(err)
    }
}

impl From<EngineError> for HapticError {
    fn from(err: EngineError) -> Self {
        HapticError::Engine(err)
    }
}
