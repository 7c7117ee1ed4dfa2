//! Boundary Models Validator
//!
//! Checks a parsed [`bcm_domain::BoundaryModels`] record before the solver
//! starts computing.
//!
//! The validator provides:
//! - Per-sub-model rules (immersed boundary, Monin-Obukhov, sponge, inflow)
//! - Cross-field checks (sponge layer names, overlapping sponge regions)
//! - Capability requirements the surrounding solver configuration must meet
//!
//! Every violation found is reported, not just the first one, so an
//! operator can fix a configuration in a single edit.
//!
//! # Examples
//!
//! ```
//! use bcm_domain::{BoundaryModels, MoninObukhovSimilarityTheory};
//! use bcm_validator::{ValidationConfig, Validator};
//!
//! let validator = Validator::new(ValidationConfig::default());
//!
//! let models = BoundaryModels::builder()
//!     .monin_obukhov(MoninObukhovSimilarityTheory::with_roughness(-1.0))
//!     .build();
//!
//! let err = validator.validate(&models).unwrap_err();
//! assert_eq!(err.violations()[0].path, "monin_obukhov.z_0");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod rules;
mod validator;

pub use config::ValidationConfig;
pub use error::ValidationError;
pub use rules::{Findings, Validate};
pub use validator::{
    CapabilityRequirement, ValidationOutcome, ValidationResult, Validator, Violation, Warning,
};
