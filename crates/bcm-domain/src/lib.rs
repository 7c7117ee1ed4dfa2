//! Boundary Models Domain Layer
//!
//! This crate defines the configuration record for the boundary-condition
//! sub-models consumed by the flow solver, plus the four sub-schemas it
//! aggregates.
//!
//! ## Key Concepts
//!
//! - **BoundaryModels**: The aggregate record. Every sub-model is optional;
//!   absence means the feature is disabled
//! - **Immersed boundary**: Solid-body forcing on a Cartesian grid
//! - **Monin-Obukhov**: Surface-layer similarity boundary condition
//! - **Sponge layers**: Ordered Rayleigh damping regions
//! - **Simulated inflow**: Synthetic turbulence at an inflow face
//!
//! ## Architecture
//!
//! - Pure data, no I/O
//! - Records are immutable once built and safe to share across threads
//! - Wire encoding lives in `bcm-wire`, rules in `bcm-validator`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod geometry;
pub mod immersed_boundary;
pub mod inflow;
pub mod models;
pub mod monin_obukhov;
pub mod sponge;

// Re-exports for convenience
pub use error::IndexError;
pub use geometry::{Axis, Face};
pub use immersed_boundary::{IbBoundaryCondition, IbMethod, IbVariable, ImmersedBoundaryMethod};
pub use inflow::{LengthScales, SimulatedTurbulentInflow};
pub use models::{BoundaryModels, BoundaryModelsBuilder};
pub use monin_obukhov::{MoninObukhovSimilarityTheory, SurfaceCondition, ThetaRegularization};
pub use sponge::{DampedVariable, DampingOrientation, DampingTarget, RayleighDampingLayer};
