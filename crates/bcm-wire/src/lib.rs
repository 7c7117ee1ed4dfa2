#![warn(missing_docs)]

//! Boundary Models Wire Layer
//!
//! Binary encoding of [`bcm_domain::BoundaryModels`] as protobuf, following
//! `proto/boundary_models.proto`. Field numbers of the aggregate are part of
//! the contract:
//!
//! | Tag | Field               |
//! |-----|---------------------|
//! | 1   | `immersed_boundary` |
//! | 2   | `monin_obukhov`     |
//! | 3   | `sponge_layers`     |
//! | 4   | `simulated_inflow`  |

// Include generated protobuf code
pub mod proto {
    //! Generated protobuf types for package `bcm.v1`
    #![allow(missing_docs)]
    include!(concat!(env!("OUT_DIR"), "/bcm.v1.rs"));
}

pub mod conversions;
pub mod codec;

pub use codec::{decode_models, encode_models, WireError};
pub use conversions::ConversionError;
