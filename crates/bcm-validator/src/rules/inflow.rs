//! Rules for the simulated turbulent inflow

use bcm_domain::inflow::VELOCITY_COMPONENTS;
use bcm_domain::{Axis, SimulatedTurbulentInflow};

use super::{check_closed, check_finite, check_names, check_non_empty, check_positive};
use super::{Findings, Validate};

impl Validate for SimulatedTurbulentInflow {
    fn validate(&self, path: &str, findings: &mut Findings) {
        if !self.face.is_single() {
            findings.violation(
                format!("{}.face", path),
                format!("inflow face must be 'low' or 'high', got '{}'", self.face),
            );
        }

        check_finite(findings, &format!("{}.mean_velocity", path), self.mean_velocity);
        check_closed(
            findings,
            &format!("{}.turbulence_intensity", path),
            self.turbulence_intensity,
            0.0,
            1.0,
        );

        for axis in Axis::ALL {
            check_positive(
                findings,
                &format!("{}.length_scales.{}", path, axis),
                self.length_scales.along(axis),
            );
        }

        let variables_path = format!("{}.variables", path);
        check_non_empty(findings, &variables_path, &self.variables, "velocity component");
        check_names(
            findings,
            self.variables.iter().map(String::as_str),
            |i| format!("{}[{}]", variables_path, i),
        );
        for (i, var) in self.variables.iter().enumerate() {
            if !var.is_empty() && !VELOCITY_COMPONENTS.contains(&var.as_str()) {
                findings.violation(
                    format!("{}[{}]", variables_path, i),
                    format!("'{}' is not a velocity component (expected u, v or w)", var),
                );
            }
        }
    }
}
