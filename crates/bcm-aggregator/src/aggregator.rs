//! Core ConfigAggregator implementation

use std::sync::Arc;

use bcm_domain::BoundaryModels;
use bcm_validator::{
    CapabilityRequirement, ValidationOutcome, ValidationResult, Validator, Warning,
};
use tracing::{debug, info};

use crate::config::AggregatorConfig;
use crate::encoding::Encoding;
use crate::error::{ConfigError, EncodeError, ParseError};

/// A record that passed validation, with what validation learned about it
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedModels {
    models: BoundaryModels,
    outcome: ValidationOutcome,
}

impl ValidatedModels {
    /// The validated record
    pub fn models(&self) -> &BoundaryModels {
        &self.models
    }

    /// Conditions the surrounding solver configuration must satisfy
    pub fn requirements(&self) -> &[CapabilityRequirement] {
        &self.outcome.requirements
    }

    /// Non-fatal findings
    pub fn warnings(&self) -> &[Warning] {
        &self.outcome.warnings
    }

    /// Take the record behind an `Arc` for sharing across solver threads
    pub fn into_shared(self) -> Arc<BoundaryModels> {
        Arc::new(self.models)
    }
}

impl std::ops::Deref for ValidatedModels {
    type Target = BoundaryModels;

    fn deref(&self) -> &BoundaryModels {
        &self.models
    }
}

/// Parses, validates and encodes boundary-model records
#[derive(Debug, Clone)]
pub struct ConfigAggregator {
    config: AggregatorConfig,
    validator: Validator,
}

impl ConfigAggregator {
    /// Create a new ConfigAggregator
    pub fn new(config: AggregatorConfig) -> Self {
        let validator = Validator::new(config.validation.clone());
        Self { config, validator }
    }

    /// Create a ConfigAggregator with default configuration
    pub fn default_config() -> Self {
        Self::new(AggregatorConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Parse raw input in the configured encoding
    pub fn parse(&self, raw: &[u8]) -> Result<BoundaryModels, ParseError> {
        self.parse_as(raw, self.config.encoding)
    }

    /// Parse raw input in an explicit encoding
    ///
    /// Empty input (or whitespace-only text) yields the record with every
    /// sub-model absent.
    pub fn parse_as(&self, raw: &[u8], encoding: Encoding) -> Result<BoundaryModels, ParseError> {
        if raw.len() > self.config.max_input_bytes {
            return Err(ParseError::InputTooLarge {
                size: raw.len(),
                max: self.config.max_input_bytes,
            });
        }

        debug!("Parsing {} bytes as {}", raw.len(), encoding);

        let models = if encoding.is_text() {
            let text = std::str::from_utf8(raw)?;
            if text.trim().is_empty() {
                BoundaryModels::default()
            } else if encoding == Encoding::Toml {
                toml::from_str(text)?
            } else {
                serde_json::from_str(text)?
            }
        } else {
            bcm_wire::decode_models(raw)?
        };

        debug!(
            "Parsed boundary models: enabled {:?}, {} sponge layer(s)",
            models.enabled_models(),
            models.sponge_layer_count()
        );

        Ok(models)
    }

    /// Validate a parsed record, collecting every violation
    pub fn validate(&self, models: &BoundaryModels) -> ValidationResult {
        self.validator.validate(models)
    }

    /// Parse then validate; the startup path
    pub fn load(&self, raw: &[u8]) -> Result<ValidatedModels, ConfigError> {
        let models = self.parse(raw)?;
        let outcome = self.validate(&models)?;

        for requirement in &outcome.requirements {
            info!("Solver configuration must provide an {}", requirement);
        }

        Ok(ValidatedModels { models, outcome })
    }

    /// Encode a record; parsing the result in the same encoding gives it back
    pub fn encode(&self, models: &BoundaryModels, encoding: Encoding) -> Result<Vec<u8>, EncodeError> {
        let bytes = match encoding {
            Encoding::Binary => bcm_wire::encode_models(models),
            Encoding::Toml => toml::to_string(models)?.into_bytes(),
            Encoding::Json => serde_json::to_vec_pretty(models)?,
        };

        debug!("Encoded boundary models as {} ({} bytes)", encoding, bytes.len());
        Ok(bytes)
    }
}

impl Default for ConfigAggregator {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcm_domain::MoninObukhovSimilarityTheory;

    #[test]
    fn test_parse_empty_every_encoding() {
        let aggregator = ConfigAggregator::default();
        for encoding in Encoding::ALL {
            let models = aggregator.parse_as(b"", encoding).unwrap();
            assert!(models.is_empty(), "{} should decode empty input", encoding);
        }
        assert!(aggregator.parse_as(b"  \n", Encoding::Toml).unwrap().is_empty());
        assert!(aggregator.parse_as(b"\n", Encoding::Json).unwrap().is_empty());
    }

    #[test]
    fn test_input_too_large() {
        let mut config = AggregatorConfig::default();
        config.max_input_bytes = 4;
        let aggregator = ConfigAggregator::new(config);

        let err = aggregator.parse(&[0u8; 5]).unwrap_err();
        assert!(matches!(err, ParseError::InputTooLarge { size: 5, max: 4 }));
    }

    #[test]
    fn test_invalid_utf8() {
        let aggregator = ConfigAggregator::default();
        let err = aggregator.parse_as(&[0xff, 0xfe], Encoding::Toml).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8(_)));
    }

    #[test]
    fn test_parse_uses_configured_encoding() {
        let aggregator = ConfigAggregator::new(AggregatorConfig::with_encoding(Encoding::Toml));
        let models = aggregator
            .parse(b"[monin_obukhov]\nz_0 = 0.1\n")
            .unwrap();
        assert_eq!(models.monin_obukhov().map(|m| m.z_0), Some(0.1));
    }

    #[test]
    fn test_load_rejects_invalid() {
        let aggregator = ConfigAggregator::default();
        let models = BoundaryModels::builder()
            .monin_obukhov(MoninObukhovSimilarityTheory::with_roughness(-1.0))
            .build();
        let raw = aggregator.encode(&models, Encoding::Binary).unwrap();

        let err = aggregator.load(&raw).unwrap_err();
        let validation = err.as_validation().unwrap();
        assert!(validation.has_violation_at("monin_obukhov.z_0"));
    }

    #[test]
    fn test_load_shared_record() {
        let aggregator = ConfigAggregator::default();
        let models = BoundaryModels::builder()
            .monin_obukhov(MoninObukhovSimilarityTheory::with_roughness(0.1))
            .build();
        let raw = aggregator.encode(&models, Encoding::Binary).unwrap();

        let validated = aggregator.load(&raw).unwrap();
        assert!(validated.has_monin_obukhov());
        assert_eq!(validated.models(), &models);
        assert!(validated.requirements().is_empty());

        let shared = validated.into_shared();
        assert_eq!(*shared, models);
    }
}
