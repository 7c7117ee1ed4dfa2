//! Simulated turbulent inflow configuration

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Face};

/// Velocity components the generator can perturb
pub const VELOCITY_COMPONENTS: [&str; 3] = ["u", "v", "w"];

fn default_variables() -> Vec<String> {
    VELOCITY_COMPONENTS.iter().map(|s| s.to_string()).collect()
}

/// Integral length scales of the synthetic turbulence [m]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthScales {
    /// Streamwise scale
    pub x: f64,
    /// Spanwise scale
    pub y: f64,
    /// Vertical scale
    pub z: f64,
}

impl LengthScales {
    /// Scale along one axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Simulated turbulent inflow sub-model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatedTurbulentInflow {
    /// Axis normal to the inflow face
    pub inflow_dim: Axis,

    /// Inflow face; must be a single side
    pub face: Face,

    /// Mean inflow velocity [m/s]
    pub mean_velocity: f64,

    /// RMS fluctuation as a fraction of the mean velocity
    pub turbulence_intensity: f64,

    /// Integral length scales
    pub length_scales: LengthScales,

    /// Random seed for the generator
    #[serde(default)]
    pub seed: u64,

    /// Velocity components to perturb
    #[serde(default = "default_variables")]
    pub variables: Vec<String>,
}
