//! Byte-level encode/decode of the aggregate record

use bcm_domain::BoundaryModels;
use prost::Message;

use crate::conversions::{models_from_proto, models_to_proto, ConversionError};
use crate::proto;

/// Errors decoding a binary blob
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Bytes are not a well-formed protobuf message of the expected shape
    #[error("malformed protobuf: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Message decoded but a present sub-message is incomplete
    #[error("incomplete message: {0}")]
    Conversion(#[from] ConversionError),
}

/// Decode a binary blob into the domain record
///
/// An empty blob decodes to the record with every sub-model absent.
pub fn decode_models(bytes: &[u8]) -> Result<BoundaryModels, WireError> {
    let message = proto::BoundaryModels::decode(bytes)?;
    Ok(models_from_proto(message)?)
}

/// Encode the domain record as a binary blob
pub fn encode_models(models: &BoundaryModels) -> Vec<u8> {
    models_to_proto(models).encode_to_vec()
}
