//! Monin-Obukhov similarity theory surface-layer configuration
//!
//! Stability constants follow the Businger-Dyer forms of the universal
//! functions; the defaults are the commonly used values.

use serde::{Deserialize, Serialize};

/// Default `beta_m` in the stable momentum stability function
pub const DEFAULT_BETA_M: f64 = 4.8;
/// Default `beta_h` in the stable heat stability function
pub const DEFAULT_BETA_H: f64 = 7.8;
/// Default `gamma_m` in the unstable momentum stability function
pub const DEFAULT_GAMMA_M: f64 = 19.3;
/// Default `gamma_h` in the unstable heat stability function
pub const DEFAULT_GAMMA_H: f64 = 12.0;
/// Default ratio of eddy diffusivities for heat and momentum
pub const DEFAULT_ALPHA: f64 = 1.0;

fn default_beta_m() -> f64 {
    DEFAULT_BETA_M
}

fn default_beta_h() -> f64 {
    DEFAULT_BETA_H
}

fn default_gamma_m() -> f64 {
    DEFAULT_GAMMA_M
}

fn default_gamma_h() -> f64 {
    DEFAULT_GAMMA_H
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

/// Thermal condition at the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum SurfaceCondition {
    /// Prescribed surface temperature [K]
    Temperature {
        /// Surface temperature
        t_s: f64,
    },

    /// Prescribed kinematic surface heat flux [K m/s]
    HeatFlux {
        /// Surface heat flux
        heat_flux: f64,
    },
}

/// Clamp applied to potential temperature in the stability computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThetaRegularization {
    /// Lower clamp [K]
    pub theta_min: f64,

    /// Upper clamp [K]
    pub theta_max: f64,
}

/// Monin-Obukhov similarity theory sub-model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoninObukhovSimilarityTheory {
    /// Surface roughness length [m]
    pub z_0: f64,

    /// Stable momentum constant
    #[serde(default = "default_beta_m")]
    pub beta_m: f64,

    /// Stable heat constant
    #[serde(default = "default_beta_h")]
    pub beta_h: f64,

    /// Unstable momentum constant
    #[serde(default = "default_gamma_m")]
    pub gamma_m: f64,

    /// Unstable heat constant
    #[serde(default = "default_gamma_h")]
    pub gamma_h: f64,

    /// Ratio of eddy diffusivities
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Thermal surface condition; `None` means neutral stratification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<SurfaceCondition>,

    /// Optional potential temperature clamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta_regularization: Option<ThetaRegularization>,

    /// Transported scalars receiving surface fluxes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_scalars: Vec<String>,
}

impl MoninObukhovSimilarityTheory {
    /// Create a neutral surface layer with default stability constants
    pub fn with_roughness(z_0: f64) -> Self {
        Self {
            z_0,
            beta_m: DEFAULT_BETA_M,
            beta_h: DEFAULT_BETA_H,
            gamma_m: DEFAULT_GAMMA_M,
            gamma_h: DEFAULT_GAMMA_H,
            alpha: DEFAULT_ALPHA,
            surface: None,
            theta_regularization: None,
            active_scalars: Vec::new(),
        }
    }

    /// Whether the surface layer is thermally neutral
    pub fn is_neutral(&self) -> bool {
        self.surface.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let most: MoninObukhovSimilarityTheory = serde_json::from_str(r#"{"z_0": 0.1}"#).unwrap();
        assert_eq!(most, MoninObukhovSimilarityTheory::with_roughness(0.1));
        assert!(most.is_neutral());
    }

    #[test]
    fn test_roughness_required() {
        let result = serde_json::from_str::<MoninObukhovSimilarityTheory>(r#"{"beta_m": 5.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_surface_heat_flux() {
        let json = r#"{"z_0": 0.01, "surface": {"type": "heat_flux", "heat_flux": 0.24}}"#;
        let most: MoninObukhovSimilarityTheory = serde_json::from_str(json).unwrap();
        assert_eq!(most.surface, Some(SurfaceCondition::HeatFlux { heat_flux: 0.24 }));
        assert!(!most.is_neutral());
    }

    #[test]
    fn test_surface_with_both_conditions_rejected() {
        let json = r#"{"z_0": 0.01, "surface": {"type": "heat_flux", "heat_flux": 0.1, "t_s": 300.0}}"#;
        assert!(serde_json::from_str::<MoninObukhovSimilarityTheory>(json).is_err());
    }
}
