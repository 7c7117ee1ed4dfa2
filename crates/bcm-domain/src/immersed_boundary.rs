//! Immersed boundary method configuration

use serde::{Deserialize, Serialize};

/// Forcing scheme used to impose the solid boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum IbMethod {
    /// Rayleigh damping towards the target value inside the solid
    Sponge {
        /// Damping coefficient [1/s]
        damping_coeff: f64,
    },

    /// Direct forcing relaxed towards the target value
    DirectForcing {
        /// Damping coefficient [1/s]
        damping_coeff: f64,
        /// Relaxation weight in (0, 1]
        weight: f64,
    },

    /// Feedback forcing with proportional and integral gains
    FeedbackForcing {
        /// Proportional gain (negative)
        alpha: f64,
        /// Integral gain (non-positive)
        beta: f64,
    },
}

impl IbMethod {
    /// Short name of the forcing scheme
    pub fn name(&self) -> &'static str {
        match self {
            IbMethod::Sponge { .. } => "sponge",
            IbMethod::DirectForcing { .. } => "direct_forcing",
            IbMethod::FeedbackForcing { .. } => "feedback_forcing",
        }
    }
}

/// Boundary condition applied to a variable at the solid surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IbBoundaryCondition {
    /// Fixed value
    Dirichlet,

    /// Zero normal gradient
    Neumann,

    /// Zero gradient along the vertical only
    NeumannZ,
}

/// A variable forced by the immersed boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IbVariable {
    /// Name of the solver field (e.g. "u", "theta")
    pub name: String,

    /// Boundary condition type at the surface
    pub bc: IbBoundaryCondition,

    /// Target value for Dirichlet conditions
    #[serde(default)]
    pub value: f64,

    /// Overwrite the field inside the solid instead of forcing it
    #[serde(rename = "override", default)]
    pub override_value: bool,
}

/// Immersed boundary method sub-model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImmersedBoundaryMethod {
    /// Forcing scheme
    pub method: IbMethod,

    /// Variables subject to immersed-boundary forcing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<IbVariable>,
}

impl ImmersedBoundaryMethod {
    /// Look up a forced variable by name
    pub fn variable(&self, name: &str) -> Option<&IbVariable> {
        self.variables.iter().find(|v| v.name == name)
    }
}
