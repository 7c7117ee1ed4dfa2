//! Rules for the Monin-Obukhov surface layer

use bcm_domain::{MoninObukhovSimilarityTheory, SurfaceCondition};

use super::{check_finite, check_names, check_positive};
use super::{Findings, Validate};

impl Validate for MoninObukhovSimilarityTheory {
    fn validate(&self, path: &str, findings: &mut Findings) {
        check_positive(findings, &format!("{}.z_0", path), self.z_0);

        let constants = [
            ("beta_m", self.beta_m),
            ("beta_h", self.beta_h),
            ("gamma_m", self.gamma_m),
            ("gamma_h", self.gamma_h),
            ("alpha", self.alpha),
        ];
        for (name, value) in constants {
            check_positive(findings, &format!("{}.{}", path, name), value);
        }

        match self.surface {
            Some(SurfaceCondition::Temperature { t_s }) => {
                check_positive(findings, &format!("{}.surface.t_s", path), t_s);
            }
            Some(SurfaceCondition::HeatFlux { heat_flux }) => {
                check_finite(findings, &format!("{}.surface.heat_flux", path), heat_flux);
            }
            None => {}
        }

        if let Some(reg) = self.theta_regularization {
            let reg_path = format!("{}.theta_regularization", path);
            let before = findings.violation_count();
            check_positive(findings, &format!("{}.theta_min", reg_path), reg.theta_min);
            check_positive(findings, &format!("{}.theta_max", reg_path), reg.theta_max);
            if findings.violation_count() == before && reg.theta_min >= reg.theta_max {
                findings.violation(
                    reg_path,
                    format!(
                        "theta_min ({}) must be less than theta_max ({})",
                        reg.theta_min, reg.theta_max
                    ),
                );
            }
        }

        check_names(
            findings,
            self.active_scalars.iter().map(String::as_str),
            |i| format!("{}.active_scalars[{}]", path, i),
        );
    }
}
