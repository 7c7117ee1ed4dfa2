//! Rayleigh damping (sponge) layer configuration

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Face};

/// Extent of a sponge layer along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DampingOrientation {
    /// Axis the layer is normal to
    pub dim: Axis,

    /// Fraction of the domain length covered by the layer, in (0, 1]
    pub fraction: f64,

    /// Face(s) the layer is attached to
    pub face: Face,
}

/// Value a damped variable is relaxed towards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum DampingTarget {
    /// A constant value
    Value {
        /// Target value
        value: f64,
    },

    /// Another solver state field (e.g. a precursor profile)
    State {
        /// Name of the target field
        name: String,
    },

    /// The horizontal mean of the variable itself
    ///
    /// Struct-shaped so that stray keys next to the tag are rejected.
    Mean {},
}

/// A variable damped inside the layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DampedVariable {
    /// Name of the solver field
    pub name: String,

    /// Relaxation target
    pub target: DampingTarget,

    /// Overwrite the field inside the layer instead of adding a forcing term
    #[serde(rename = "override", default)]
    pub override_value: bool,
}

/// One Rayleigh damping region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RayleighDampingLayer {
    /// Optional identifier; unique among named layers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Damping coefficient [1/s]
    pub beta: f64,

    /// Spatial extent of the layer
    #[serde(default)]
    pub orientations: Vec<DampingOrientation>,

    /// Variables damped inside the layer
    #[serde(default)]
    pub variables: Vec<DampedVariable>,
}

impl RayleighDampingLayer {
    /// Human-readable label: the name if set, otherwise the position
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => format!("'{}'", name),
            None => format!("#{}", index),
        }
    }

    /// Whether the layer covers the given face of the given axis
    pub fn covers(&self, dim: Axis, face: Face) -> bool {
        self.orientations
            .iter()
            .any(|o| o.dim == dim && o.face.overlaps(face))
    }

    /// Whether the layer damps the named variable
    pub fn damps(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_layer() -> RayleighDampingLayer {
        RayleighDampingLayer {
            name: Some("top".to_string()),
            beta: 0.2,
            orientations: vec![DampingOrientation {
                dim: Axis::Z,
                fraction: 0.25,
                face: Face::High,
            }],
            variables: vec![DampedVariable {
                name: "w".to_string(),
                target: DampingTarget::Value { value: 0.0 },
                override_value: false,
            }],
        }
    }

    #[test]
    fn test_covers() {
        let layer = top_layer();
        assert!(layer.covers(Axis::Z, Face::High));
        assert!(layer.covers(Axis::Z, Face::Both));
        assert!(!layer.covers(Axis::Z, Face::Low));
        assert!(!layer.covers(Axis::X, Face::High));
    }

    #[test]
    fn test_label() {
        let mut layer = top_layer();
        assert_eq!(layer.label(3), "'top'");
        layer.name = None;
        assert_eq!(layer.label(3), "#3");
    }

    #[test]
    fn test_mean_target_from_json() {
        let json = r#"{"name": "theta", "target": {"type": "mean"}}"#;
        let var: DampedVariable = serde_json::from_str(json).unwrap();
        assert_eq!(var.target, DampingTarget::Mean {});
    }

    #[test]
    fn test_target_extra_keys_rejected() {
        let mean = r#"{"name": "theta", "target": {"type": "mean", "value": 0.0}}"#;
        assert!(serde_json::from_str::<DampedVariable>(mean).is_err());

        let value = r#"{"name": "w", "target": {"type": "value", "value": 0.0, "name": "w"}}"#;
        assert!(serde_json::from_str::<DampedVariable>(value).is_err());
    }

    #[test]
    fn test_damps() {
        let layer = top_layer();
        assert!(layer.damps("w"));
        assert!(!layer.damps("u"));
    }
}
