//! Wire types and JSON codec for registry request and response bodies.

use crate::errors::SchemaRegistryError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A schema as registered under a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// The schema document, exactly as the registry stores it.
    pub schema: String,
    /// Subject the schema is registered under.
    pub subject: String,
    /// Registry-wide schema id.
    pub id: i32,
    /// Version within the subject.
    pub version: i32,
}

/// Request body carrying only the schema document.
#[derive(Debug, Serialize)]
pub(crate) struct SchemaOnlyRequest<'a> {
    pub schema: &'a str,
}

/// Response body carrying only the schema document.
#[derive(Debug, Deserialize)]
pub(crate) struct SchemaOnlyResponse {
    pub schema: String,
}

/// Response body of a registration.
#[derive(Debug, Deserialize)]
pub(crate) struct SchemaIdResponse {
    pub id: i32,
}

pub(crate) fn encode<T: Serialize>(value: &T) -> crate::Result<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|e| SchemaRegistryError::Decode(format!("failed to encode request: {}", e)))
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> crate::Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        SchemaRegistryError::Decode(format!(
            "failed to parse response: {} (body: {})",
            e,
            String::from_utf8_lossy(body)
        ))
    })
}
