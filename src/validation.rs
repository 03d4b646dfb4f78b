//! Local checks on identifiers, run before a request is built.

use crate::errors::SchemaRegistryError;
use std::fmt;

/// Largest version id the registry accepts (it stores versions as 32-bit
/// signed integers).
pub const MAX_VERSION_ID: i64 = i32::MAX as i64;

/// Path token addressing the most recent version of a subject.
pub const LATEST_VERSION: &str = "latest";

/// Check that `id` is a valid schema version id: `1..=2^31-1`.
///
/// This only catches programmer errors; whether the version exists is for
/// the registry to say.
pub fn check_schema_version_id(id: i64) -> crate::Result<()> {
    if id <= 0 || id > MAX_VERSION_ID {
        return Err(SchemaRegistryError::InvalidVersion(id));
    }
    Ok(())
}

/// Check that a subject is non-empty.
pub fn check_subject(subject: &str) -> crate::Result<()> {
    if subject.is_empty() {
        return Err(SchemaRegistryError::InvalidSubject);
    }
    Ok(())
}

/// A version reference within a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionId {
    /// A concrete version number.
    Number(i64),
    /// The most recent version.
    Latest,
}

impl VersionId {
    /// Validate the reference. `Latest` is always valid.
    pub fn check(&self) -> crate::Result<()> {
        match *self {
            VersionId::Number(id) => check_schema_version_id(id),
            VersionId::Latest => Ok(()),
        }
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionId::Number(id) => write!(f, "{}", id),
            VersionId::Latest => f.write_str(LATEST_VERSION),
        }
    }
}

impl From<i32> for VersionId {
    fn from(id: i32) -> Self {
        VersionId::Number(i64::from(id))
    }
}

impl From<i64> for VersionId {
    fn from(id: i64) -> Self {
        VersionId::Number(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_smallest_version() {
        assert!(check_schema_version_id(1).is_ok());
        assert!(check_schema_version_id(29).is_ok());
        assert!(check_schema_version_id(MAX_VERSION_ID).is_ok());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(matches!(
            check_schema_version_id(0),
            Err(SchemaRegistryError::InvalidVersion(0))
        ));
        assert!(check_schema_version_id(-1).is_err());
        assert!(check_schema_version_id(i64::MIN).is_err());
    }

    #[test]
    fn rejects_above_ceiling() {
        assert!(check_schema_version_id(MAX_VERSION_ID + 1).is_err());
    }

    #[test]
    fn version_id_display() {
        assert_eq!(VersionId::from(3).to_string(), "3");
        assert_eq!(VersionId::Latest.to_string(), "latest");
    }

    #[test]
    fn version_id_check() {
        assert!(VersionId::Latest.check().is_ok());
        assert!(VersionId::Number(0).check().is_err());
    }

    #[test]
    fn empty_subject_rejected() {
        assert!(matches!(check_subject(""), Err(SchemaRegistryError::InvalidSubject)));
        assert!(check_subject("orders-value").is_ok());
    }
}
