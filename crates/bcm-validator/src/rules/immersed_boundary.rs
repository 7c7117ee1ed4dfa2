//! Rules for the immersed boundary method

use bcm_domain::{IbMethod, ImmersedBoundaryMethod};

use super::{check_finite, check_half_open, check_names, check_non_empty, check_positive};
use super::{Findings, Validate};

impl Validate for ImmersedBoundaryMethod {
    fn validate(&self, path: &str, findings: &mut Findings) {
        let method_path = format!("{}.method", path);
        match self.method {
            IbMethod::Sponge { damping_coeff } => {
                check_positive(findings, &format!("{}.damping_coeff", method_path), damping_coeff);
            }
            IbMethod::DirectForcing {
                damping_coeff,
                weight,
            } => {
                check_positive(findings, &format!("{}.damping_coeff", method_path), damping_coeff);
                check_half_open(findings, &format!("{}.weight", method_path), weight, 0.0, 1.0);
            }
            IbMethod::FeedbackForcing { alpha, beta } => {
                // Gains act against the velocity error, so both must be non-positive
                if !(alpha.is_finite() && alpha < 0.0) {
                    findings.violation(
                        format!("{}.alpha", method_path),
                        format!("must be finite and < 0, got {}", alpha),
                    );
                }
                if !(beta.is_finite() && beta <= 0.0) {
                    findings.violation(
                        format!("{}.beta", method_path),
                        format!("must be finite and <= 0, got {}", beta),
                    );
                }
            }
        }

        let variables_path = format!("{}.variables", path);
        check_non_empty(findings, &variables_path, &self.variables, "variable");
        check_names(
            findings,
            self.variables.iter().map(|v| v.name.as_str()),
            |i| format!("{}[{}].name", variables_path, i),
        );
        for (i, var) in self.variables.iter().enumerate() {
            check_finite(findings, &format!("{}[{}].value", variables_path, i), var.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcm_domain::{IbBoundaryCondition, IbVariable};

    fn variable(name: &str) -> IbVariable {
        IbVariable {
            name: name.to_string(),
            bc: IbBoundaryCondition::Dirichlet,
            value: 0.0,
            override_value: false,
        }
    }

    fn run(ib: &ImmersedBoundaryMethod) -> Vec<String> {
        let mut findings = Findings::default();
        ib.validate("immersed_boundary", &mut findings);
        let (violations, _) = findings.into_parts();
        violations.into_iter().map(|v| v.path).collect()
    }

    #[test]
    fn test_valid_direct_forcing() {
        let ib = ImmersedBoundaryMethod {
            method: IbMethod::DirectForcing {
                damping_coeff: 5.0,
                weight: 1.0,
            },
            variables: vec![variable("u"), variable("v")],
        };
        assert!(run(&ib).is_empty());
    }

    #[test]
    fn test_bad_weight_and_coeff() {
        let ib = ImmersedBoundaryMethod {
            method: IbMethod::DirectForcing {
                damping_coeff: 0.0,
                weight: 1.5,
            },
            variables: vec![variable("u")],
        };
        assert_eq!(
            run(&ib),
            vec![
                "immersed_boundary.method.damping_coeff",
                "immersed_boundary.method.weight",
            ]
        );
    }

    #[test]
    fn test_feedback_gain_signs() {
        let ib = ImmersedBoundaryMethod {
            method: IbMethod::FeedbackForcing {
                alpha: 1.0,
                beta: 0.0,
            },
            variables: vec![variable("u")],
        };
        assert_eq!(run(&ib), vec!["immersed_boundary.method.alpha"]);
    }

    #[test]
    fn test_variables_required_and_unique() {
        let empty = ImmersedBoundaryMethod {
            method: IbMethod::Sponge { damping_coeff: 1.0 },
            variables: vec![],
        };
        assert_eq!(run(&empty), vec!["immersed_boundary.variables"]);

        let duplicated = ImmersedBoundaryMethod {
            method: IbMethod::Sponge { damping_coeff: 1.0 },
            variables: vec![variable("u"), variable("u")],
        };
        assert_eq!(run(&duplicated), vec!["immersed_boundary.variables[1].name"]);
    }
}
