use crate::error_codes::{self, ErrorCodeEntry};
use serde::Deserialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Main client error type
// ---------------------------------------------------------------------------

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SchemaRegistryError {
    /// A structured error reported by the registry.
    #[error("{0}")]
    Registry(Box<ResourceError>),

    /// The request could not be executed (DNS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// A request or response body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The registry answered with a content type or body the client cannot
    /// interpret, so no registry error code is available.
    #[error("client: unexpected response with status {status} and content type '{content_type}'")]
    UnexpectedResponse { status: u16, content_type: String },

    /// A version identifier failed local validation.
    #[error("client: {0} is not a valid value for the version id [version id > 0 && version id <= 2^31-1]")]
    InvalidVersion(i64),

    /// A subject failed local validation.
    #[error("client: subject must not be empty")]
    InvalidSubject,

    /// Builder misconfiguration.
    #[error("builder error: {0}")]
    Builder(String),
}

impl SchemaRegistryError {
    /// Returns the registry error payload, if this error carries one.
    pub fn resource_error(&self) -> Option<&ResourceError> {
        match self {
            SchemaRegistryError::Registry(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the registry error code, if this error carries one.
    pub fn error_code(&self) -> Option<i32> {
        self.resource_error().map(|e| e.error_code)
    }
}

impl From<ResourceError> for SchemaRegistryError {
    fn from(err: ResourceError) -> Self {
        SchemaRegistryError::Registry(Box::new(err))
    }
}

#[cfg(feature = "reqwest-transport")]
impl From<reqwest::Error> for SchemaRegistryError {
    fn from(err: reqwest::Error) -> Self {
        SchemaRegistryError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SchemaRegistryError {
    fn from(err: serde_json::Error) -> Self {
        SchemaRegistryError::Decode(err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SchemaRegistryError>;

// ---------------------------------------------------------------------------
// Resource error (structured error from the registry)
// ---------------------------------------------------------------------------

/// The registry's self-describing failure payload, together with the request
/// it answered.
///
/// `method` and `path` are empty when the error was recovered from a response
/// that did not follow the registry's content-type contract.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceError {
    /// Registry-defined numeric error code, preserved verbatim.
    pub error_code: i32,
    pub message: String,
    pub method: String,
    pub path: String,
    pub http_status: u16,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client: ({}: {}) failed with error code {} {}",
            self.method, self.path, self.error_code, self.message
        )
    }
}

impl std::error::Error for ResourceError {}

impl ResourceError {
    /// Create a resource error without request context.
    pub fn new(error_code: i32, message: impl Into<String>) -> Self {
        Self {
            error_code,
            message: message.into(),
            method: String::new(),
            path: String::new(),
            http_status: 0,
        }
    }

    /// Attach the method and path of the request that failed.
    pub fn with_context(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
        self.method = method.into();
        self.path = path.into();
        self
    }

    /// Attach the HTTP status the error arrived with.
    pub fn with_status(mut self, http_status: u16) -> Self {
        self.http_status = http_status;
        self
    }

    /// Returns the registry error code.
    pub fn code(&self) -> i32 {
        self.error_code
    }

    /// Returns the catalog entry for this code, if it is a well-known one.
    pub fn catalog_entry(&self) -> Option<&'static ErrorCodeEntry> {
        error_codes::lookup(self.error_code)
    }

    /// Returns `true` if the registry reported that the subject does not exist.
    pub fn is_subject_not_found(&self) -> bool {
        self.error_code == error_codes::SUBJECT_NOT_FOUND.code
    }

    /// Returns `true` if the registry reported that the version does not exist.
    pub fn is_version_not_found(&self) -> bool {
        self.error_code == error_codes::VERSION_NOT_FOUND.code
    }

    /// Returns `true` if the registry reported that the schema does not exist.
    pub fn is_schema_not_found(&self) -> bool {
        self.error_code == error_codes::SCHEMA_NOT_FOUND.code
    }
}

// ---------------------------------------------------------------------------
// Wire format for parsing registry error responses
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceErrorPayload {
    pub error_code: i32,
    pub message: String,
}

impl ResourceErrorPayload {
    pub fn into_resource_error(self, http_status: u16) -> ResourceError {
        ResourceError::new(self.error_code, self.message).with_status(http_status)
    }
}
