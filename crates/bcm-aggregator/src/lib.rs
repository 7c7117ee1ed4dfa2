//! Boundary Models Aggregator
//!
//! Turns raw configuration input into a validated [`BoundaryModels`] record
//! for the solver.
//!
//! # Architecture
//!
//! ```text
//! bytes → ConfigAggregator::parse → BoundaryModels → Validator → ValidatedModels → solver
//! ```
//!
//! # Encodings
//!
//! - **Binary**: protobuf wire format (see `bcm-wire`)
//! - **TOML**: tables `immersed_boundary`, `monin_obukhov`, `simulated_inflow`
//!   and an array of tables `sponge_layers`
//! - **JSON**: same shape as TOML
//!
//! # Example Usage
//!
//! ```
//! use bcm_aggregator::{AggregatorConfig, ConfigAggregator, Encoding};
//!
//! let aggregator = ConfigAggregator::new(AggregatorConfig::with_encoding(Encoding::Toml));
//!
//! let raw = br#"
//! [monin_obukhov]
//! z_0 = 0.1
//!
//! [[sponge_layers]]
//! beta = 0.05
//! orientations = [{ dim = "z", fraction = 0.25, face = "high" }]
//! variables = [{ name = "w", target = { type = "value", value = 0.0 } }]
//! "#;
//!
//! let models = aggregator.load(raw)?;
//! assert!(models.has_monin_obukhov());
//! assert_eq!(models.sponge_layer_count(), 1);
//! assert!(models.sponge_layer_at(1).is_err());
//! # Ok::<(), bcm_aggregator::ConfigError>(())
//! ```

#![warn(missing_docs)]

mod aggregator;
mod config;
mod encoding;
mod error;

pub use aggregator::{ConfigAggregator, ValidatedModels};
pub use config::{AggregatorConfig, DEFAULT_MAX_INPUT_BYTES};
pub use encoding::Encoding;
pub use error::{ConfigError, EncodeError, ParseError};

pub use bcm_domain::{BoundaryModels, IndexError};
pub use bcm_validator::{
    CapabilityRequirement, ValidationConfig, ValidationError, ValidationOutcome, Violation,
    Warning,
};
