//! Record-level validation logic

use std::collections::HashMap;
use std::fmt;

use bcm_domain::{Axis, BoundaryModels, Face};
use tracing::{debug, info, warn};

use crate::rules::{Findings, Validate};
use crate::{ValidationConfig, ValidationError};

/// A broken rule, located by its dotted field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the offending field (e.g. `sponge_layers[1].beta`)
    pub path: String,

    /// What is wrong with it
    pub message: String,
}

impl Violation {
    /// Create a violation
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A suspicious but permitted configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Path of the field the warning is about
    pub path: String,

    /// Description
    pub message: String,
}

impl Warning {
    /// Create a warning
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A condition only the surrounding solver configuration can confirm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityRequirement {
    /// The solver must configure an inflow boundary on this face
    InflowBoundary {
        /// Axis normal to the inflow face
        dim: Axis,
        /// Inflow face
        face: Face,
    },
}

impl fmt::Display for CapabilityRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityRequirement::InflowBoundary { dim, face } => {
                write!(f, "inflow boundary on the {} face of axis {}", face, dim)
            }
        }
    }
}

/// Outcome of a successful validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    /// Conditions the solver configuration must satisfy
    pub requirements: Vec<CapabilityRequirement>,

    /// Non-fatal findings
    pub warnings: Vec<Warning>,
}

/// Result of validating a record
pub type ValidationResult = Result<ValidationOutcome, ValidationError>;

/// Validates boundary-model records before the solver uses them
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new Validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Validator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a record against every sub-model rule and cross-field check
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying every violation found.
    pub fn validate(&self, models: &BoundaryModels) -> ValidationResult {
        let mut findings = Findings::default();

        // 1. Sub-model rules
        if let Some(ib) = models.immersed_boundary() {
            ib.validate("immersed_boundary", &mut findings);
        }
        if let Some(most) = models.monin_obukhov() {
            most.validate("monin_obukhov", &mut findings);
        }
        for (i, layer) in models.sponge_layers().iter().enumerate() {
            layer.validate(&format!("sponge_layers[{}]", i), &mut findings);
        }
        if let Some(inflow) = models.simulated_inflow() {
            inflow.validate("simulated_inflow", &mut findings);
        }

        // 2. Cross-field checks
        if self.config.unique_layer_names {
            self.check_layer_names(models, &mut findings);
        }
        if self.config.warn_on_overlaps || self.config.strict_overlaps {
            self.check_sponge_overlaps(models, &mut findings);
        }
        if self.config.warn_on_damped_inflow {
            self.check_damped_inflow(models, &mut findings);
        }

        // 3. Requirements on the wider solver configuration
        let requirements: Vec<CapabilityRequirement> = models
            .simulated_inflow()
            .map(|inflow| CapabilityRequirement::InflowBoundary {
                dim: inflow.inflow_dim,
                face: inflow.face,
            })
            .into_iter()
            .collect();

        let (violations, warnings) = findings.into_parts();
        for warning in &warnings {
            warn!(path = %warning.path, "{}", warning.message);
        }

        if !violations.is_empty() {
            debug!("Validation found {} violation(s)", violations.len());
            return Err(ValidationError::new(violations));
        }

        info!(
            enabled = ?models.enabled_models(),
            sponge_layers = models.sponge_layer_count(),
            warnings = warnings.len(),
            requirements = requirements.len(),
            "Boundary models validated"
        );

        Ok(ValidationOutcome {
            requirements,
            warnings,
        })
    }

    /// Named sponge layers must not share a name
    fn check_layer_names(&self, models: &BoundaryModels, findings: &mut Findings) {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (i, layer) in models.sponge_layers().iter().enumerate() {
            let Some(name) = layer.name.as_deref() else {
                continue;
            };
            if name.trim().is_empty() {
                continue;
            }
            if let Some(first) = first_seen.get(name) {
                findings.violation(
                    format!("sponge_layers[{}].name", i),
                    format!("duplicate layer name '{}' (first used by sponge_layers[{}])", name, first),
                );
            } else {
                first_seen.insert(name, i);
            }
        }
    }

    /// Two layers damping the same variable on the same face of the same axis
    fn check_sponge_overlaps(&self, models: &BoundaryModels, findings: &mut Findings) {
        let layers = models.sponge_layers();
        for (i, a) in layers.iter().enumerate() {
            for (j, b) in layers.iter().enumerate().skip(i + 1) {
                let shared_region = a.orientations.iter().find(|oa| {
                    b.orientations
                        .iter()
                        .any(|ob| oa.dim == ob.dim && oa.face.overlaps(ob.face))
                });
                let Some(region) = shared_region else {
                    continue;
                };
                let Some(shared_var) = a.variables.iter().find(|v| b.damps(&v.name)) else {
                    continue;
                };

                let path = format!("sponge_layers[{}]", j);
                let message = format!(
                    "overlaps sponge layer {} on axis {} ({}) and both damp '{}'",
                    a.label(i),
                    region.dim,
                    region.face,
                    shared_var.name
                );
                if self.config.strict_overlaps {
                    findings.violation(path, message);
                } else {
                    findings.warning(path, message);
                }
            }
        }
    }

    /// A sponge layer on the inflow face would damp the injected turbulence
    fn check_damped_inflow(&self, models: &BoundaryModels, findings: &mut Findings) {
        let Some(inflow) = models.simulated_inflow() else {
            return;
        };
        for (i, layer) in models.sponge_layers().iter().enumerate() {
            if !layer.covers(inflow.inflow_dim, inflow.face) {
                continue;
            }
            if let Some(var) = inflow.variables.iter().find(|v| layer.damps(v)) {
                findings.warning(
                    format!("sponge_layers[{}]", i),
                    format!(
                        "damps '{}' on the inflow face ({} {}) of the simulated inflow",
                        var, inflow.inflow_dim, inflow.face
                    ),
                );
            }
        }
    }
}
