//! Rules for a single Rayleigh damping layer

use std::collections::HashSet;

use bcm_domain::{DampingTarget, RayleighDampingLayer};

use super::{check_finite, check_half_open, check_names, check_non_empty, check_positive};
use super::{Findings, Validate};

impl Validate for RayleighDampingLayer {
    fn validate(&self, path: &str, findings: &mut Findings) {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                findings.violation(format!("{}.name", path), "name must not be empty when set");
            }
        }

        check_positive(findings, &format!("{}.beta", path), self.beta);

        let orientations_path = format!("{}.orientations", path);
        check_non_empty(findings, &orientations_path, &self.orientations, "orientation");
        let mut axes = HashSet::new();
        for (i, orientation) in self.orientations.iter().enumerate() {
            let entry = format!("{}[{}]", orientations_path, i);
            check_half_open(findings, &format!("{}.fraction", entry), orientation.fraction, 0.0, 1.0);
            if !axes.insert(orientation.dim) {
                findings.violation(
                    format!("{}.dim", entry),
                    format!("axis {} appears more than once in this layer", orientation.dim),
                );
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
            let target_path = format!("{}[{}].target", variables_path, i);
            match &var.target {
                DampingTarget::Value { value } => {
                    check_finite(findings, &format!("{}.value", target_path), *value);
                }
                DampingTarget::State { name } if name.trim().is_empty() => {
                    findings.violation(format!("{}.name", target_path), "target state name must not be empty");
                }
                DampingTarget::State { .. } | DampingTarget::Mean {} => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcm_domain::{Axis, DampedVariable, DampingOrientation, Face};

    fn layer() -> RayleighDampingLayer {
        RayleighDampingLayer {
            name: Some("top".to_string()),
            beta: 0.1,
            orientations: vec![DampingOrientation {
                dim: Axis::Z,
                fraction: 0.3,
                face: Face::High,
            }],
            variables: vec![DampedVariable {
                name: "w".to_string(),
                target: DampingTarget::Value { value: 0.0 },
                override_value: false,
            }],
        }
    }

    fn run(layer: &RayleighDampingLayer) -> Vec<String> {
        let mut findings = Findings::default();
        layer.validate("sponge_layers[0]", &mut findings);
        let (violations, _) = findings.into_parts();
        violations.into_iter().map(|v| v.path).collect()
    }

    #[test]
    fn test_valid_layer() {
        assert!(run(&layer()).is_empty());
    }

    #[test]
    fn test_unnamed_layer_is_valid() {
        let mut l = layer();
        l.name = None;
        assert!(run(&l).is_empty());
    }

    #[test]
    fn test_fraction_bounds() {
        let mut l = layer();
        l.orientations[0].fraction = 0.0;
        assert_eq!(run(&l), vec!["sponge_layers[0].orientations[0].fraction"]);

        l.orientations[0].fraction = 1.0;
        assert!(run(&l).is_empty());
    }

    #[test]
    fn test_repeated_axis() {
        let mut l = layer();
        l.orientations.push(DampingOrientation {
            dim: Axis::Z,
            fraction: 0.1,
            face: Face::Low,
        });
        assert_eq!(run(&l), vec!["sponge_layers[0].orientations[1].dim"]);
    }

    #[test]
    fn test_empty_lists() {
        let mut l = layer();
        l.orientations.clear();
        l.variables.clear();
        assert_eq!(
            run(&l),
            vec!["sponge_layers[0].orientations", "sponge_layers[0].variables"]
        );
    }

    #[test]
    fn test_empty_state_target() {
        let mut l = layer();
        l.variables[0].target = DampingTarget::State { name: " ".to_string() };
        assert_eq!(run(&l), vec!["sponge_layers[0].variables[0].target.name"]);
    }
}
