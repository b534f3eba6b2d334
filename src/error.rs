use thiserror::Error;

/// A color string that is neither `#RGB`, `#RRGGBB`, `rgb(..)` nor `rgba(..)`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid color `{input}`: {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl ColorParseError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            reason,
        }
    }
}

/// Rejected animation settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be a finite number of at least 1px, got {0}")]
    InvalidCellSize(f64),
    #[error("angular speed must be finite, got {0}")]
    InvalidSpeed(f64),
    #[error("sway amplitude must be finite and non-negative, got {0}")]
    InvalidAmplitude(f64),
    #[error("jitter fraction must lie in [0, 1], got {0}")]
    InvalidJitter(f64),
    #[error("palette needs at least one color")]
    EmptyPalette,
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("setting `{key}` expects a number, got `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error(transparent)]
    Color(#[from] ColorParseError),
}
