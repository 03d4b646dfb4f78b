//! Well-known numeric error codes returned by Confluent-compatible schema
//! registries in the `error_code` field of their error payloads.
//!
//! The registry derives most codes from the HTTP status (e.g. `404` becomes
//! `404xx`), so the catalog also records the status each code normally
//! travels with.

use std::fmt;

/// A single entry in the registry error catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCodeEntry {
    /// Numeric code carried in the `error_code` field.
    pub code: i32,
    /// Human-readable error name (e.g., "SchemaNotFound").
    pub name: &'static str,
    /// HTTP status the registry normally pairs with this code.
    pub http_status: u16,
    /// Default human-readable description.
    pub message: &'static str,
}

impl fmt::Display for ErrorCodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.name, self.message)
    }
}

// ---------------------------------------------------------------------------
// 404xx: Missing resources
// ---------------------------------------------------------------------------

pub const SUBJECT_NOT_FOUND: ErrorCodeEntry = ErrorCodeEntry { code: 40401, name: "SubjectNotFound", http_status: 404, message: "Subject not found" };
pub const VERSION_NOT_FOUND: ErrorCodeEntry = ErrorCodeEntry { code: 40402, name: "VersionNotFound", http_status: 404, message: "Version not found" };
pub const SCHEMA_NOT_FOUND: ErrorCodeEntry = ErrorCodeEntry { code: 40403, name: "SchemaNotFound", http_status: 404, message: "Schema not found" };

// ---------------------------------------------------------------------------
// 409 / 422xx: Rejected input
// ---------------------------------------------------------------------------

pub const INCOMPATIBLE_SCHEMA: ErrorCodeEntry = ErrorCodeEntry { code: 409, name: "IncompatibleSchema", http_status: 409, message: "Schema is incompatible with an earlier schema" };
pub const INVALID_SCHEMA: ErrorCodeEntry = ErrorCodeEntry { code: 42201, name: "InvalidSchema", http_status: 422, message: "Invalid schema" };
pub const INVALID_VERSION: ErrorCodeEntry = ErrorCodeEntry { code: 42202, name: "InvalidVersion", http_status: 422, message: "Invalid version" };
pub const INVALID_COMPATIBILITY_LEVEL: ErrorCodeEntry = ErrorCodeEntry { code: 42203, name: "InvalidCompatibilityLevel", http_status: 422, message: "Invalid compatibility level" };

// ---------------------------------------------------------------------------
// 500xx: Server-side failures
// ---------------------------------------------------------------------------

pub const BACKEND_STORE_ERROR: ErrorCodeEntry = ErrorCodeEntry { code: 50001, name: "BackendStoreError", http_status: 500, message: "Error in the backend data store" };
pub const OPERATION_TIMED_OUT: ErrorCodeEntry = ErrorCodeEntry { code: 50002, name: "OperationTimedOut", http_status: 500, message: "Operation timed out" };
pub const FORWARDING_ERROR: ErrorCodeEntry = ErrorCodeEntry { code: 50003, name: "ForwardingError", http_status: 500, message: "Error while forwarding the request to the primary" };

/// All known registry error codes.
pub const ALL_ERROR_CODES: &[ErrorCodeEntry] = &[
    SUBJECT_NOT_FOUND,
    VERSION_NOT_FOUND,
    SCHEMA_NOT_FOUND,
    INCOMPATIBLE_SCHEMA,
    INVALID_SCHEMA,
    INVALID_VERSION,
    INVALID_COMPATIBILITY_LEVEL,
    BACKEND_STORE_ERROR,
    OPERATION_TIMED_OUT,
    FORWARDING_ERROR,
];

/// Look up a catalog entry by its numeric code.
pub fn lookup(code: i32) -> Option<&'static ErrorCodeEntry> {
    ALL_ERROR_CODES.iter().find(|e| e.code == code)
}
