//! Configuration for the ConfigAggregator

use bcm_validator::ValidationConfig;
use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;

/// Default input size limit (1 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Configuration for the ConfigAggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Encoding used by `parse` and `load`
    pub encoding: Encoding,

    /// Maximum accepted input size (bytes)
    pub max_input_bytes: usize,

    /// Cross-field validation switches
    pub validation: ValidationConfig,
}

impl AggregatorConfig {
    /// Configuration for the given encoding with default limits
    pub fn with_encoding(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_bytes == 0 {
            return Err("max_input_bytes must be greater than 0".to_string());
        }
        if self.validation.strict_overlaps && !self.validation.warn_on_overlaps {
            return Err("strict_overlaps requires warn_on_overlaps".to_string());
        }
        Ok(())
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Binary,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            validation: ValidationConfig::default(),
        }
    }
}

impl AggregatorConfig {
    /// Permissive preset: larger inputs, only per-sub-model rules
    pub fn permissive() -> Self {
        Self {
            encoding: Encoding::Binary,
            max_input_bytes: 16 * DEFAULT_MAX_INPUT_BYTES,
            validation: ValidationConfig::permissive(),
        }
    }

    /// Strict preset: small inputs, overlapping sponge layers rejected
    pub fn strict() -> Self {
        Self {
            encoding: Encoding::Binary,
            max_input_bytes: 64 * 1024,
            validation: ValidationConfig::strict(),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
