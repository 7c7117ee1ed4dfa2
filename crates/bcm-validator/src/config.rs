//! Validator configuration

use serde::{Deserialize, Serialize};

/// Configuration for cross-field validation rules
///
/// Per-sub-model rules always run; these switches only govern the checks
/// that span several sub-models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Named sponge layers must have distinct names
    pub unique_layer_names: bool,

    /// Report sponge layers damping the same variable on the same face as warnings
    pub warn_on_overlaps: bool,

    /// Promote overlapping sponge layers from warnings to violations
    pub strict_overlaps: bool,

    /// Warn when a sponge layer damps the simulated inflow face
    pub warn_on_damped_inflow: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            unique_layer_names: true,
            warn_on_overlaps: true,
            strict_overlaps: false,
            warn_on_damped_inflow: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (sub-model rules only, no warnings)
    pub fn permissive() -> Self {
        Self {
            unique_layer_names: false,
            warn_on_overlaps: false,
            strict_overlaps: false,
            warn_on_damped_inflow: false,
        }
    }

    /// Create a strict configuration (overlapping sponge layers are errors)
    pub fn strict() -> Self {
        Self {
            unique_layer_names: true,
            warn_on_overlaps: true,
            strict_overlaps: true,
            warn_on_damped_inflow: true,
        }
    }
}
