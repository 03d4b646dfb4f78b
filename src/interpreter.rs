//! Classification of registry responses by content type and status.
//!
//! Success is decided by the content type first: only a response carrying
//! [`CONTENT_TYPE_SCHEMA_JSON`] takes part in the registry's success/error
//! contract. A generic JSON response is never a success, even with a 2xx
//! status or a body shaped like a registry error.

use crate::errors::{ResourceError, ResourceErrorPayload, SchemaRegistryError};
use crate::transport::{Method, Response};

/// Media type the registry uses for every response that follows its contract.
pub const CONTENT_TYPE_SCHEMA_JSON: &str = "application/vnd.schemaregistry.v1+json";

/// Generic JSON media type.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Header name carrying the media type.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// How a response's `Content-Type` relates to the registry contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// The canonical schema-registry media type.
    SchemaRegistryJson,
    /// Plain `application/json`.
    GenericJson,
    /// Anything else, including a missing header.
    Other,
}

impl ContentKind {
    /// Classify a `Content-Type` header value. Parameters such as `charset`
    /// are ignored and the comparison is case-insensitive.
    pub fn classify(content_type: Option<&str>) -> Self {
        let media_type = match content_type {
            Some(value) => value.split(';').next().unwrap_or_default().trim(),
            None => return ContentKind::Other,
        };

        if media_type.eq_ignore_ascii_case(CONTENT_TYPE_SCHEMA_JSON) {
            ContentKind::SchemaRegistryJson
        } else if media_type.eq_ignore_ascii_case(CONTENT_TYPE_JSON) {
            ContentKind::GenericJson
        } else {
            ContentKind::Other
        }
    }
}

/// The interpretation of one registry response.
#[derive(Debug)]
pub enum Verdict {
    /// 2xx with the canonical content type. Carries the undecoded body.
    Success(Vec<u8>),
    /// A registry error delivered within the registry's contract (canonical
    /// content type, non-2xx status). Carries the request context.
    Rejected(ResourceError),
    /// A response outside the contract: generic JSON, another content type,
    /// or an unreadable error body.
    Anomaly(SchemaRegistryError),
}

impl Verdict {
    /// Collapse the verdict into the body on success or an error otherwise.
    pub fn into_result(self) -> crate::Result<Vec<u8>> {
        match self {
            Verdict::Success(body) => Ok(body),
            Verdict::Rejected(err) => Err(err.into()),
            Verdict::Anomaly(err) => Err(err),
        }
    }
}

/// Interpret the response to `method path`.
pub fn interpret(method: Method, path: &str, response: Response) -> Verdict {
    let kind = ContentKind::classify(response.header_value(CONTENT_TYPE_HEADER));

    match kind {
        ContentKind::SchemaRegistryJson if response.is_success() => Verdict::Success(response.body),
        ContentKind::SchemaRegistryJson => match parse_error_body(&response) {
            Some(err) => Verdict::Rejected(err.with_context(method.as_str(), path)),
            None => Verdict::Anomaly(unexpected(&response)),
        },
        ContentKind::GenericJson => {
            tracing::warn!(
                method = %method,
                path = %path,
                status = response.status,
                "registry answered with generic JSON instead of {}",
                CONTENT_TYPE_SCHEMA_JSON
            );
            // Surfaced without request context: the response is not a
            // registry answer to this request.
            match parse_error_body(&response) {
                Some(err) => Verdict::Anomaly(err.into()),
                None => Verdict::Anomaly(unexpected(&response)),
            }
        }
        ContentKind::Other => {
            tracing::warn!(
                method = %method,
                path = %path,
                status = response.status,
                content_type = response.header_value(CONTENT_TYPE_HEADER).unwrap_or_default(),
                "registry answered with an unexpected content type"
            );
            Verdict::Anomaly(unexpected(&response))
        }
    }
}

fn parse_error_body(response: &Response) -> Option<ResourceError> {
    serde_json::from_slice::<ResourceErrorPayload>(&response.body)
        .ok()
        .map(|payload| payload.into_resource_error(response.status))
}

fn unexpected(response: &Response) -> SchemaRegistryError {
    SchemaRegistryError::UnexpectedResponse {
        status: response.status,
        content_type: response
            .header_value(CONTENT_TYPE_HEADER)
            .unwrap_or_default()
            .to_string(),
    }
}
