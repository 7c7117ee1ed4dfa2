//! Error types for the aggregator

use bcm_validator::ValidationError;
use bcm_wire::{ConversionError, WireError};
use thiserror::Error;

/// Raw input could not be decoded into a [`bcm_domain::BoundaryModels`]
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input exceeds the configured size limit
    #[error("Input too large: {size} bytes (max: {max})")]
    InputTooLarge {
        /// Input size in bytes
        size: usize,
        /// Configured limit
        max: usize,
    },

    /// Text input is not UTF-8
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// TOML syntax or shape error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed protobuf bytes
    #[error("Protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Protobuf decoded but a present sub-message is incomplete
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl From<WireError> for ParseError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::Decode(e) => ParseError::Decode(e),
            WireError::Conversion(e) => ParseError::Conversion(e),
        }
    }
}

/// Startup failure: the input is either unreadable or invalid
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Parsing failed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Parsing succeeded but the record breaks one or more rules
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    /// The validation error, if that is what failed
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ConfigError::Validation(e) => Some(e),
            ConfigError::Parse(_) => None,
        }
    }
}

/// A record could not be written in the requested encoding
#[derive(Error, Debug)]
pub enum EncodeError {
    /// TOML serialization failed (e.g. a seed above `i64::MAX`)
    #[error("TOML encode error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// JSON serialization failed
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcm_validator::Violation;

    #[test]
    fn test_input_too_large_display() {
        let err = ParseError::InputTooLarge { size: 10, max: 4 };
        assert_eq!(err.to_string(), "Input too large: 10 bytes (max: 4)");
    }

    #[test]
    fn test_wire_error_maps_to_conversion() {
        let wire = WireError::Conversion(ConversionError::MissingField(
            "immersed_boundary.method".to_string(),
        ));
        let err = ParseError::from(wire);
        assert!(matches!(err, ParseError::Conversion(ConversionError::MissingField(_))));
    }

    #[test]
    fn test_config_error_as_validation() {
        let err = ConfigError::from(ValidationError::new(vec![Violation::new(
            "monin_obukhov.z_0",
            "must be > 0, got 0",
        )]));
        assert!(err.as_validation().is_some());
        assert!(err.to_string().starts_with("1 validation error(s):"));

        let err = ConfigError::from(ParseError::InputTooLarge { size: 2, max: 1 });
        assert!(err.as_validation().is_none());
    }
}
