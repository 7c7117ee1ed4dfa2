//! Type conversions between proto and domain types
//!
//! Conversion from the wire is where the shape of a present sub-message is
//! enforced: unset oneofs and `UNSPECIFIED` enum values become errors here,
//! before any semantic validation runs. Every error carries the dotted path
//! of the offending field.

use bcm_domain::{
    Axis, BoundaryModels, DampedVariable, DampingOrientation, DampingTarget, Face,
    IbBoundaryCondition, IbMethod, IbVariable, ImmersedBoundaryMethod, LengthScales,
    MoninObukhovSimilarityTheory, RayleighDampingLayer, SimulatedTurbulentInflow,
    SurfaceCondition, ThetaRegularization,
};
use bcm_domain::inflow::VELOCITY_COMPONENTS;
use bcm_domain::monin_obukhov::{
    DEFAULT_ALPHA, DEFAULT_BETA_H, DEFAULT_BETA_M, DEFAULT_GAMMA_H, DEFAULT_GAMMA_M,
};

use crate::proto;
use crate::proto::damped_variable::Target;
use crate::proto::ib_variable::BoundaryCondition;
use crate::proto::immersed_boundary_method::Method;
use crate::proto::monin_obukhov_similarity_theory::Surface;

/// Error type for conversion failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A required field or oneof of a present message is not set
    #[error("missing required field: {0}")]
    MissingField(String),

    /// An enum field holds the UNSPECIFIED value
    #[error("enum field {0} is unspecified")]
    UnspecifiedEnum(String),

    /// An enum field holds a value outside the known range
    #[error("unknown value {value} for enum field {field}")]
    UnknownEnumValue {
        /// Path of the field
        field: String,
        /// Raw wire value
        value: i32,
    },
}

/// Convert proto Axis to domain Axis
pub fn axis_from_proto(raw: i32, field: &str) -> Result<Axis, ConversionError> {
    match proto::Axis::try_from(raw) {
        Ok(proto::Axis::Unspecified) => Err(ConversionError::UnspecifiedEnum(field.to_string())),
        Ok(proto::Axis::X) => Ok(Axis::X),
        Ok(proto::Axis::Y) => Ok(Axis::Y),
        Ok(proto::Axis::Z) => Ok(Axis::Z),
        Err(_) => Err(ConversionError::UnknownEnumValue {
            field: field.to_string(),
            value: raw,
        }),
    }
}

/// Convert domain Axis to proto Axis
pub fn axis_to_proto(axis: Axis) -> proto::Axis {
    match axis {
        Axis::X => proto::Axis::X,
        Axis::Y => proto::Axis::Y,
        Axis::Z => proto::Axis::Z,
    }
}

/// Convert proto Face to domain Face
pub fn face_from_proto(raw: i32, field: &str) -> Result<Face, ConversionError> {
    match proto::Face::try_from(raw) {
        Ok(proto::Face::Unspecified) => Err(ConversionError::UnspecifiedEnum(field.to_string())),
        Ok(proto::Face::Low) => Ok(Face::Low),
        Ok(proto::Face::High) => Ok(Face::High),
        Ok(proto::Face::Both) => Ok(Face::Both),
        Err(_) => Err(ConversionError::UnknownEnumValue {
            field: field.to_string(),
            value: raw,
        }),
    }
}

/// Convert domain Face to proto Face
pub fn face_to_proto(face: Face) -> proto::Face {
    match face {
        Face::Low => proto::Face::Low,
        Face::High => proto::Face::High,
        Face::Both => proto::Face::Both,
    }
}

fn bc_from_proto(raw: i32, field: &str) -> Result<IbBoundaryCondition, ConversionError> {
    match BoundaryCondition::try_from(raw) {
        Ok(BoundaryCondition::Unspecified) => {
            Err(ConversionError::UnspecifiedEnum(field.to_string()))
        }
        Ok(BoundaryCondition::Dirichlet) => Ok(IbBoundaryCondition::Dirichlet),
        Ok(BoundaryCondition::Neumann) => Ok(IbBoundaryCondition::Neumann),
        Ok(BoundaryCondition::NeumannZ) => Ok(IbBoundaryCondition::NeumannZ),
        Err(_) => Err(ConversionError::UnknownEnumValue {
            field: field.to_string(),
            value: raw,
        }),
    }
}

fn bc_to_proto(bc: IbBoundaryCondition) -> BoundaryCondition {
    match bc {
        IbBoundaryCondition::Dirichlet => BoundaryCondition::Dirichlet,
        IbBoundaryCondition::Neumann => BoundaryCondition::Neumann,
        IbBoundaryCondition::NeumannZ => BoundaryCondition::NeumannZ,
    }
}

/// Convert proto ImmersedBoundaryMethod to domain ImmersedBoundaryMethod
pub fn ib_from_proto(
    ib: proto::ImmersedBoundaryMethod,
    path: &str,
) -> Result<ImmersedBoundaryMethod, ConversionError> {
    let method = match ib.method {
        Some(Method::Sponge(m)) => IbMethod::Sponge {
            damping_coeff: m.damping_coeff,
        },
        Some(Method::DirectForcing(m)) => IbMethod::DirectForcing {
            damping_coeff: m.damping_coeff,
            weight: m.weight,
        },
        Some(Method::FeedbackForcing(m)) => IbMethod::FeedbackForcing {
            alpha: m.alpha,
            beta: m.beta,
        },
        None => return Err(ConversionError::MissingField(format!("{}.method", path))),
    };

    let variables = ib
        .variables
        .into_iter()
        .enumerate()
        .map(|(i, v)| -> Result<IbVariable, ConversionError> {
            Ok(IbVariable {
                bc: bc_from_proto(v.bc, &format!("{}.variables[{}].bc", path, i))?,
                name: v.name,
                value: v.value,
                override_value: v.r#override,
            })
        })
        .collect::<Result<Vec<_>, ConversionError>>()?;

    Ok(ImmersedBoundaryMethod { method, variables })
}

/// Convert domain ImmersedBoundaryMethod to proto ImmersedBoundaryMethod
pub fn ib_to_proto(ib: &ImmersedBoundaryMethod) -> proto::ImmersedBoundaryMethod {
    let method = match ib.method {
        IbMethod::Sponge { damping_coeff } => Method::Sponge(proto::SpongeForcing { damping_coeff }),
        IbMethod::DirectForcing {
            damping_coeff,
            weight,
        } => Method::DirectForcing(proto::DirectForcing {
            damping_coeff,
            weight,
        }),
        IbMethod::FeedbackForcing { alpha, beta } => {
            Method::FeedbackForcing(proto::FeedbackForcing { alpha, beta })
        }
    };

    proto::ImmersedBoundaryMethod {
        method: Some(method),
        variables: ib
            .variables
            .iter()
            .map(|v| proto::IbVariable {
                name: v.name.clone(),
                bc: bc_to_proto(v.bc) as i32,
                value: v.value,
                r#override: v.override_value,
            })
            .collect(),
    }
}

/// Convert proto MoninObukhovSimilarityTheory to domain, filling absent
/// stability constants with their defaults
pub fn most_from_proto(most: proto::MoninObukhovSimilarityTheory) -> MoninObukhovSimilarityTheory {
    MoninObukhovSimilarityTheory {
        z_0: most.z_0,
        beta_m: most.beta_m.unwrap_or(DEFAULT_BETA_M),
        beta_h: most.beta_h.unwrap_or(DEFAULT_BETA_H),
        gamma_m: most.gamma_m.unwrap_or(DEFAULT_GAMMA_M),
        gamma_h: most.gamma_h.unwrap_or(DEFAULT_GAMMA_H),
        alpha: most.alpha.unwrap_or(DEFAULT_ALPHA),
        surface: most.surface.map(|s| match s {
            Surface::SurfaceTemperature(t_s) => SurfaceCondition::Temperature { t_s },
            Surface::SurfaceHeatFlux(heat_flux) => SurfaceCondition::HeatFlux { heat_flux },
        }),
        theta_regularization: most.theta_regularization.map(|r| ThetaRegularization {
            theta_min: r.theta_min,
            theta_max: r.theta_max,
        }),
        active_scalars: most.active_scalars,
    }
}

/// Convert domain MoninObukhovSimilarityTheory to proto
pub fn most_to_proto(most: &MoninObukhovSimilarityTheory) -> proto::MoninObukhovSimilarityTheory {
    proto::MoninObukhovSimilarityTheory {
        z_0: most.z_0,
        beta_m: Some(most.beta_m),
        beta_h: Some(most.beta_h),
        gamma_m: Some(most.gamma_m),
        gamma_h: Some(most.gamma_h),
        alpha: Some(most.alpha),
        surface: most.surface.map(|s| match s {
            SurfaceCondition::Temperature { t_s } => Surface::SurfaceTemperature(t_s),
            SurfaceCondition::HeatFlux { heat_flux } => Surface::SurfaceHeatFlux(heat_flux),
        }),
        theta_regularization: most.theta_regularization.map(|r| proto::ThetaRegularization {
            theta_min: r.theta_min,
            theta_max: r.theta_max,
        }),
        active_scalars: most.active_scalars.clone(),
    }
}

/// Convert proto RayleighDampingLayer to domain RayleighDampingLayer
pub fn sponge_from_proto(
    layer: proto::RayleighDampingLayer,
    path: &str,
) -> Result<RayleighDampingLayer, ConversionError> {
    let orientations = layer
        .orientations
        .iter()
        .enumerate()
        .map(|(i, o)| -> Result<DampingOrientation, ConversionError> {
            Ok(DampingOrientation {
                dim: axis_from_proto(o.dim, &format!("{}.orientations[{}].dim", path, i))?,
                fraction: o.fraction,
                face: face_from_proto(o.face, &format!("{}.orientations[{}].face", path, i))?,
            })
        })
        .collect::<Result<Vec<_>, ConversionError>>()?;

    let variables = layer
        .variables
        .into_iter()
        .enumerate()
        .map(|(i, v)| -> Result<DampedVariable, ConversionError> {
            let target = match v.target {
                Some(Target::TargetValue(value)) => DampingTarget::Value { value },
                Some(Target::TargetStateName(name)) => DampingTarget::State { name },
                Some(Target::TargetMean(_)) => DampingTarget::Mean {},
                None => {
                    return Err(ConversionError::MissingField(format!(
                        "{}.variables[{}].target",
                        path, i
                    )))
                }
            };
            Ok(DampedVariable {
                name: v.name,
                target,
                override_value: v.r#override,
            })
        })
        .collect::<Result<Vec<_>, ConversionError>>()?;

    Ok(RayleighDampingLayer {
        name: layer.name,
        beta: layer.beta,
        orientations,
        variables,
    })
}

/// Convert domain RayleighDampingLayer to proto RayleighDampingLayer
pub fn sponge_to_proto(layer: &RayleighDampingLayer) -> proto::RayleighDampingLayer {
    proto::RayleighDampingLayer {
        name: layer.name.clone(),
        beta: layer.beta,
        orientations: layer
            .orientations
            .iter()
            .map(|o| proto::DampingOrientation {
                dim: axis_to_proto(o.dim) as i32,
                fraction: o.fraction,
                face: face_to_proto(o.face) as i32,
            })
            .collect(),
        variables: layer
            .variables
            .iter()
            .map(|v| proto::DampedVariable {
                name: v.name.clone(),
                target: Some(match &v.target {
                    DampingTarget::Value { value } => Target::TargetValue(*value),
                    DampingTarget::State { name } => Target::TargetStateName(name.clone()),
                    DampingTarget::Mean {} => Target::TargetMean(true),
                }),
                r#override: v.override_value,
            })
            .collect(),
    }
}

/// Convert proto SimulatedTurbulentInflow to domain SimulatedTurbulentInflow
///
/// An empty component list on the wire means all three components.
pub fn inflow_from_proto(
    inflow: proto::SimulatedTurbulentInflow,
    path: &str,
) -> Result<SimulatedTurbulentInflow, ConversionError> {
    let scales = inflow
        .length_scales
        .ok_or_else(|| ConversionError::MissingField(format!("{}.length_scales", path)))?;

    let variables = if inflow.variables.is_empty() {
        VELOCITY_COMPONENTS.iter().map(|s| s.to_string()).collect()
    } else {
        inflow.variables
    };

    Ok(SimulatedTurbulentInflow {
        inflow_dim: axis_from_proto(inflow.inflow_dim, &format!("{}.inflow_dim", path))?,
        face: face_from_proto(inflow.face, &format!("{}.face", path))?,
        mean_velocity: inflow.mean_velocity,
        turbulence_intensity: inflow.turbulence_intensity,
        length_scales: LengthScales {
            x: scales.x,
            y: scales.y,
            z: scales.z,
        },
        seed: inflow.seed,
        variables,
    })
}

/// Convert domain SimulatedTurbulentInflow to proto SimulatedTurbulentInflow
pub fn inflow_to_proto(inflow: &SimulatedTurbulentInflow) -> proto::SimulatedTurbulentInflow {
    proto::SimulatedTurbulentInflow {
        inflow_dim: axis_to_proto(inflow.inflow_dim) as i32,
        face: face_to_proto(inflow.face) as i32,
        mean_velocity: inflow.mean_velocity,
        turbulence_intensity: inflow.turbulence_intensity,
        length_scales: Some(proto::LengthScales {
            x: inflow.length_scales.x,
            y: inflow.length_scales.y,
            z: inflow.length_scales.z,
        }),
        seed: inflow.seed,
        variables: inflow.variables.clone(),
    }
}

/// Convert proto BoundaryModels to domain BoundaryModels
pub fn models_from_proto(models: proto::BoundaryModels) -> Result<BoundaryModels, ConversionError> {
    let mut builder = BoundaryModels::builder();

    if let Some(ib) = models.immersed_boundary {
        builder = builder.immersed_boundary(ib_from_proto(ib, "immersed_boundary")?);
    }
    if let Some(most) = models.monin_obukhov {
        builder = builder.monin_obukhov(most_from_proto(most));
    }
    for (i, layer) in models.sponge_layers.into_iter().enumerate() {
        builder = builder.sponge_layer(sponge_from_proto(layer, &format!("sponge_layers[{}]", i))?);
    }
    if let Some(inflow) = models.simulated_inflow {
        builder = builder.simulated_inflow(inflow_from_proto(inflow, "simulated_inflow")?);
    }

    Ok(builder.build())
}

/// Convert domain BoundaryModels to proto BoundaryModels
pub fn models_to_proto(models: &BoundaryModels) -> proto::BoundaryModels {
    proto::BoundaryModels {
        immersed_boundary: models.immersed_boundary().map(ib_to_proto),
        monin_obukhov: models.monin_obukhov().map(most_to_proto),
        sponge_layers: models.sponge_layers().iter().map(sponge_to_proto).collect(),
        simulated_inflow: models.simulated_inflow().map(inflow_to_proto),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proto_layer() -> proto::RayleighDampingLayer {
        proto::RayleighDampingLayer {
            name: Some("top".to_string()),
            beta: 0.2,
            orientations: vec![proto::DampingOrientation {
                dim: proto::Axis::Z as i32,
                fraction: 0.25,
                face: proto::Face::High as i32,
            }],
            variables: vec![proto::DampedVariable {
                name: "w".to_string(),
                target: Some(Target::TargetMean(true)),
                r#override: false,
            }],
        }
    }

    #[test]
    fn test_axis_roundtrip() {
        for axis in Axis::ALL {
            let raw = axis_to_proto(axis) as i32;
            assert_eq!(axis_from_proto(raw, "dim").unwrap(), axis);
        }
    }

    #[test]
    fn test_unspecified_face_rejected() {
        let err = face_from_proto(0, "simulated_inflow.face").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnspecifiedEnum("simulated_inflow.face".to_string())
        );
    }

    #[test]
    fn test_unknown_axis_rejected() {
        let err = axis_from_proto(17, "dim").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownEnumValue {
                field: "dim".to_string(),
                value: 17
            }
        );
    }

    #[test]
    fn test_ib_without_method_rejected() {
        let ib = proto::ImmersedBoundaryMethod {
            method: None,
            variables: vec![],
        };
        let err = ib_from_proto(ib, "immersed_boundary").unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingField("immersed_boundary.method".to_string())
        );
    }

    #[test]
    fn test_sponge_conversion() {
        let layer = sponge_from_proto(proto_layer(), "sponge_layers[0]").unwrap();
        assert_eq!(layer.name.as_deref(), Some("top"));
        assert_eq!(layer.orientations[0].dim, Axis::Z);
        assert_eq!(layer.orientations[0].face, Face::High);
        assert_eq!(layer.variables[0].target, DampingTarget::Mean {});
        assert_eq!(sponge_to_proto(&layer), proto_layer());
    }

    #[test]
    fn test_sponge_error_path() {
        let mut layer = proto_layer();
        layer.orientations[0].face = 0;
        let err = sponge_from_proto(layer, "sponge_layers[3]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "enum field sponge_layers[3].orientations[0].face is unspecified"
        );
    }

    #[test]
    fn test_most_defaults_filled() {
        let most = most_from_proto(proto::MoninObukhovSimilarityTheory {
            z_0: 0.1,
            ..Default::default()
        });
        assert_eq!(most, MoninObukhovSimilarityTheory::with_roughness(0.1));
    }

    #[test]
    fn test_inflow_empty_variables_mean_all() {
        let inflow = inflow_from_proto(
            proto::SimulatedTurbulentInflow {
                inflow_dim: proto::Axis::X as i32,
                face: proto::Face::Low as i32,
                mean_velocity: 5.0,
                turbulence_intensity: 0.1,
                length_scales: Some(proto::LengthScales { x: 1.0, y: 1.0, z: 1.0 }),
                seed: 0,
                variables: vec![],
            },
            "simulated_inflow",
        )
        .unwrap();
        assert_eq!(inflow.variables, vec!["u", "v", "w"]);
    }

    #[test]
    fn test_inflow_missing_length_scales() {
        let err = inflow_from_proto(
            proto::SimulatedTurbulentInflow {
                inflow_dim: proto::Axis::X as i32,
                face: proto::Face::Low as i32,
                ..Default::default()
            },
            "simulated_inflow",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingField("simulated_inflow.length_scales".to_string())
        );
    }
}
