//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::color::ColorError;

/// Problems with the samples or the requested style.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Empty,
    NotANumber { index: usize, text: String },
    NonFinite { index: usize },
    TooFewSamples { need: usize, got: usize },
    UnknownStyle(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "no samples given"),
            InputError::NotANumber { index, text } => {
                write!(f, "sample {index}: '{text}' is not a number")
            }
            InputError::NonFinite { index } => write!(f, "sample {index} is not finite"),
            InputError::TooFewSamples { need, got } => {
                write!(f, "need at least {need} samples, got {got}")
            }
            InputError::UnknownStyle(name) => write!(f, "unknown style `{name}`"),
        }
    }
}
impl Error for InputError {}

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    HeightTooSmall { min: usize, got: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HeightTooSmall { min, got } => {
                write!(f, "height must be at least {min}, got {got}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum SparkError {
    InvalidInput(InputError),
    InvalidConfiguration(ConfigError),
    Color(ColorError),
    Io(io::Error),
}

impl SparkError {
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SparkError::InvalidInput(_))
    }

    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, SparkError::InvalidConfiguration(_))
    }
}

impl fmt::Display for SparkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SparkError::InvalidInput(e) => write!(f, "invalid input: {e}"),
            SparkError::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            SparkError::Color(e) => write!(f, "{e}"),
            SparkError::Io(e) => write!(f, "{e}"),
        }
    }
}
impl Error for SparkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SparkError::InvalidInput(e) => Some(e),
            SparkError::InvalidConfiguration(e) => Some(e),
            SparkError::Color(e) => Some(e),
            SparkError::Io(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<InputError> for SparkError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}
impl From<ConfigError> for SparkError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}
impl From<ColorError> for SparkError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<io::Error> for SparkError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_keep_the_error_kind() {
        let e: SparkError = InputError::Empty.into();
        assert!(e.is_invalid_input());
        assert!(!e.is_invalid_configuration());

        let e: SparkError = ConfigError::HeightTooSmall { min: 2, got: 1 }.into();
        assert!(e.is_invalid_configuration());
        assert_eq!(
            e.to_string(),
            "invalid configuration: height must be at least 2, got 1"
        );
    }

    #[test]
    fn source_points_at_the_inner_error() {
        let e: SparkError = InputError::UnknownStyle("sparkle".into()).into();
        let inner = e.source().map(ToString::to_string);
        assert_eq!(inner.as_deref(), Some("unknown style `sparkle`"));
    }
}
