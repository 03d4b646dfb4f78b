use schemaregistry::error_codes;
use schemaregistry::{ResourceError, SchemaRegistryError};

// ---------------------------------------------------------------------------
// SchemaRegistryError variant tests
// ---------------------------------------------------------------------------

#[test]
fn test_registry_error_display() {
    let err = SchemaRegistryError::from(ResourceError::new(50103, "wrong content type"));
    assert_eq!(
        err.to_string(),
        "client: (: ) failed with error code 50103 wrong content type"
    );
}

#[test]
fn test_registry_error_display_with_context() {
    let err = SchemaRegistryError::from(
        ResourceError::new(40403, "Schema not found").with_context("POST", "/subjects/mysubject"),
    );
    assert_eq!(
        err.to_string(),
        "client: (POST: /subjects/mysubject) failed with error code 40403 Schema not found"
    );
}

#[test]
fn test_transport_display() {
    let err = SchemaRegistryError::Transport("connection refused".into());
    assert_eq!(err.to_string(), "transport error: connection refused");
    assert_eq!(err.error_code(), None);
}

#[test]
fn test_decode_display() {
    let err = SchemaRegistryError::Decode("missing field `id`".into());
    assert_eq!(err.to_string(), "decode error: missing field `id`");
}

#[test]
fn test_unexpected_response_display() {
    let err = SchemaRegistryError::UnexpectedResponse {
        status: 502,
        content_type: "text/html".into(),
    };
    assert_eq!(
        err.to_string(),
        "client: unexpected response with status 502 and content type 'text/html'"
    );
}

#[test]
fn test_invalid_version_display() {
    let err = SchemaRegistryError::InvalidVersion(0);
    assert_eq!(
        err.to_string(),
        "client: 0 is not a valid value for the version id [version id > 0 && version id <= 2^31-1]"
    );
}

#[test]
fn test_builder_display() {
    let err = SchemaRegistryError::Builder("url is required".into());
    assert_eq!(err.to_string(), "builder error: url is required");
}

#[test]
fn test_from_serde_json_error() {
    let json_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
    let err = SchemaRegistryError::from(json_err);
    assert!(matches!(err, SchemaRegistryError::Decode(_)));
}

// ---------------------------------------------------------------------------
// ResourceError tests
// ---------------------------------------------------------------------------

#[test]
fn test_resource_error_predicates() {
    assert!(ResourceError::new(40401, "").is_subject_not_found());
    assert!(ResourceError::new(40402, "").is_version_not_found());
    assert!(ResourceError::new(40403, "").is_schema_not_found());
    assert!(!ResourceError::new(40401, "").is_schema_not_found());
}

#[test]
fn test_resource_error_code_preserved() {
    let err = ResourceError::new(99999, "custom").with_status(418);
    assert_eq!(err.code(), 99999);
    assert_eq!(err.http_status, 418);
    assert!(err.catalog_entry().is_none());
}

#[test]
fn test_resource_error_catalog_entry() {
    let err = ResourceError::new(42201, "Invalid schema");
    assert_eq!(err.catalog_entry(), Some(&error_codes::INVALID_SCHEMA));
}
