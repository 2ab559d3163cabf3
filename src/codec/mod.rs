//! JSON serialization collaborator.
//!
//! # Responsibilities
//! - Decode request bodies into typed parameter objects
//! - Encode typed payloads into response bodies
//! - Define the fixed wire format for timestamps
//!
//! # Design Decisions
//! - serde_json is the single wire codec; no content negotiation
//! - Decode/encode failures are surfaced to the dispatcher, which maps them
//!   to the generic failure path, never to a domain error

pub mod timestamp;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode a JSON request body into the route's parameter type.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Encode a typed payload as a JSON response body.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}
