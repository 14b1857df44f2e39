//! Domain-level errors.
//!
//! These errors are what repository implementations hand back to callers.
//! They are independent of the storage engine: engine failures are carried
//! as an opaque source inside [`DomainError::Storage`].

use std::fmt;

use thiserror::Error;

/// Boxed engine error kept as the source of [`DomainError::Storage`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Entity an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Role,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Role => write!(f, "role"),
        }
    }
}

/// Errors surfaced by user and role repositories.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Identifier string is not a valid key; raised before any query runs
    #[error("invalid {entity} id: {value:?}")]
    InvalidIdentifier { entity: EntityKind, value: String },

    #[error("user not found")]
    UserNotFound,

    #[error("role not found")]
    RoleNotFound,

    /// Any other failure reported by the storage engine
    #[error("storage error: {0}")]
    Storage(#[source] BoxError),
}

impl DomainError {
    /// Create an invalid identifier error
    pub fn invalid_id(entity: EntityKind, value: impl Into<String>) -> Self {
        DomainError::InvalidIdentifier {
            entity,
            value: value.into(),
        }
    }

    /// Wrap a storage engine error
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DomainError::Storage(Box::new(err))
    }

    /// Not-found sentinel for the given entity
    pub fn not_found(entity: EntityKind) -> Self {
        match entity {
            EntityKind::User => DomainError::UserNotFound,
            EntityKind::Role => DomainError::RoleNotFound,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::UserNotFound | DomainError::RoleNotFound)
    }

    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, DomainError::InvalidIdentifier { .. })
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn invalid_id_message_names_the_entity() {
        let err = DomainError::invalid_id(EntityKind::Role, "abc");
        assert_eq!(err.to_string(), "invalid role id: \"abc\"");

        let err = DomainError::invalid_id(EntityKind::User, "");
        assert!(err.to_string().contains("invalid user id"));
    }

    #[test]
    fn not_found_and_invalid_are_distinguishable() {
        let missing = DomainError::not_found(EntityKind::Role);
        let invalid = DomainError::invalid_id(EntityKind::Role, "x");

        assert!(matches!(missing, DomainError::RoleNotFound));
        assert!(missing.is_not_found());
        assert!(!missing.is_invalid_identifier());
        assert!(invalid.is_invalid_identifier());
        assert!(!invalid.is_not_found());
    }

    #[test]
    fn storage_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = DomainError::storage(io);

        assert!(err.to_string().contains("disk gone"));
        assert!(err.source().is_some());
    }
}
