//! The aggregate boundary-models record

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::immersed_boundary::ImmersedBoundaryMethod;
use crate::inflow::SimulatedTurbulentInflow;
use crate::monin_obukhov::MoninObukhovSimilarityTheory;
use crate::sponge::RayleighDampingLayer;

/// Boundary-condition sub-models for one solver run
///
/// Every sub-model is optional and absence means the feature is disabled.
/// Sponge layers are kept in insertion order, which is the order the solver
/// applies them in; duplicates are allowed.
///
/// The record is built once (by parsing or with [`BoundaryModels::builder`])
/// and only read afterwards, so it can be shared across solver threads.
///
/// # Examples
///
/// ```
/// use bcm_domain::{BoundaryModels, MoninObukhovSimilarityTheory};
///
/// let models = BoundaryModels::builder()
///     .monin_obukhov(MoninObukhovSimilarityTheory::with_roughness(0.1))
///     .build();
///
/// assert!(models.has_monin_obukhov());
/// assert!(!models.has_immersed_boundary());
/// assert_eq!(models.sponge_layer_count(), 0);
/// assert!(models.sponge_layer_at(0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryModels {
    #[serde(skip_serializing_if = "Option::is_none")]
    immersed_boundary: Option<ImmersedBoundaryMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    monin_obukhov: Option<MoninObukhovSimilarityTheory>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    sponge_layers: Vec<RayleighDampingLayer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    simulated_inflow: Option<SimulatedTurbulentInflow>,
}

impl BoundaryModels {
    /// Start building a record
    pub fn builder() -> BoundaryModelsBuilder {
        BoundaryModelsBuilder::default()
    }

    /// Whether immersed-boundary forcing is enabled
    pub fn has_immersed_boundary(&self) -> bool {
        self.immersed_boundary.is_some()
    }

    /// Immersed boundary configuration, if enabled
    pub fn immersed_boundary(&self) -> Option<&ImmersedBoundaryMethod> {
        self.immersed_boundary.as_ref()
    }

    /// Whether the Monin-Obukhov surface layer is enabled
    pub fn has_monin_obukhov(&self) -> bool {
        self.monin_obukhov.is_some()
    }

    /// Monin-Obukhov configuration, if enabled
    pub fn monin_obukhov(&self) -> Option<&MoninObukhovSimilarityTheory> {
        self.monin_obukhov.as_ref()
    }

    /// Number of sponge layers
    pub fn sponge_layer_count(&self) -> usize {
        self.sponge_layers.len()
    }

    /// Sponge layer at position `index`
    ///
    /// # Errors
    /// Returns [`IndexError`] if `index >= sponge_layer_count()`
    pub fn sponge_layer_at(&self, index: usize) -> Result<&RayleighDampingLayer, IndexError> {
        self.sponge_layers.get(index).ok_or(IndexError {
            index,
            len: self.sponge_layers.len(),
        })
    }

    /// All sponge layers in application order
    pub fn sponge_layers(&self) -> &[RayleighDampingLayer] {
        &self.sponge_layers
    }

    /// Whether simulated turbulent inflow is enabled
    pub fn has_simulated_inflow(&self) -> bool {
        self.simulated_inflow.is_some()
    }

    /// Simulated inflow configuration, if enabled
    pub fn simulated_inflow(&self) -> Option<&SimulatedTurbulentInflow> {
        self.simulated_inflow.as_ref()
    }

    /// Whether every sub-model is disabled
    pub fn is_empty(&self) -> bool {
        self.immersed_boundary.is_none()
            && self.monin_obukhov.is_none()
            && self.sponge_layers.is_empty()
            && self.simulated_inflow.is_none()
    }

    /// Names of the enabled sub-models, for logging
    pub fn enabled_models(&self) -> Vec<&'static str> {
        let mut enabled = Vec::new();
        if self.has_immersed_boundary() {
            enabled.push("immersed_boundary");
        }
        if self.has_monin_obukhov() {
            enabled.push("monin_obukhov");
        }
        if !self.sponge_layers.is_empty() {
            enabled.push("sponge_layers");
        }
        if self.has_simulated_inflow() {
            enabled.push("simulated_inflow");
        }
        enabled
    }
}

/// Builder for [`BoundaryModels`]
#[derive(Debug, Clone, Default)]
pub struct BoundaryModelsBuilder {
    inner: BoundaryModels,
}

impl BoundaryModelsBuilder {
    /// Enable immersed-boundary forcing
    pub fn immersed_boundary(mut self, ib: ImmersedBoundaryMethod) -> Self {
        self.inner.immersed_boundary = Some(ib);
        self
    }

    /// Enable the Monin-Obukhov surface layer
    pub fn monin_obukhov(mut self, most: MoninObukhovSimilarityTheory) -> Self {
        self.inner.monin_obukhov = Some(most);
        self
    }

    /// Append one sponge layer
    pub fn sponge_layer(mut self, layer: RayleighDampingLayer) -> Self {
        self.inner.sponge_layers.push(layer);
        self
    }

    /// Append several sponge layers, keeping their order
    pub fn sponge_layers<I>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = RayleighDampingLayer>,
    {
        self.inner.sponge_layers.extend(layers);
        self
    }

    /// Enable simulated turbulent inflow
    pub fn simulated_inflow(mut self, inflow: SimulatedTurbulentInflow) -> Self {
        self.inner.simulated_inflow = Some(inflow);
        self
    }

    /// Finish building
    pub fn build(self) -> BoundaryModels {
        self.inner
    }
}



#[cfg(test)]
mod proptests {
    use super::fixtures;
    use super::*;
    use crate::MoninObukhovSimilarityTheory;
    use proptest::prelude::*;

    fn build(ib: bool, most: bool, sponges: usize, inflow: bool) -> BoundaryModels {
        let mut builder = BoundaryModels::builder();
        if ib {
            builder = builder.immersed_boundary(fixtures::ib());
        }
        if most {
            builder = builder.monin_obukhov(MoninObukhovSimilarityTheory::with_roughness(0.1));
        }
        builder = builder.sponge_layers((0..sponges).map(fixtures::layer));
        if inflow {
            builder = builder.simulated_inflow(fixtures::inflow());
        }
        builder.build()
    }

    proptest! {
        /// Property: presence bits and sponge count survive a text round trip
        #[test]
        fn test_presence_roundtrip(
            ib: bool,
            most: bool,
            sponges in 0usize..6,
            inflow: bool,
        ) {
            let models = build(ib, most, sponges, inflow);
            let json = serde_json::to_string(&models).unwrap();
            let parsed: BoundaryModels = serde_json::from_str(&json).unwrap();

            prop_assert_eq!(parsed.has_immersed_boundary(), ib);
            prop_assert_eq!(parsed.has_monin_obukhov(), most);
            prop_assert_eq!(parsed.sponge_layer_count(), sponges);
            prop_assert_eq!(parsed.has_simulated_inflow(), inflow);
            prop_assert_eq!(parsed, models);
        }

        /// Property: indexing past the end always fails
        #[test]
        fn test_index_past_end(sponges in 0usize..6, extra in 0usize..10) {
            let models = build(false, false, sponges, false);
            prop_assert!(models.sponge_layer_at(sponges + extra).is_err());
        }
    }
}
