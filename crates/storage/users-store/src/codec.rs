//! Identifier codec.
//!
//! The domain treats identifiers as opaque strings while the tables key rows
//! by a signed 64-bit integer that is never negative. Every string that
//! reaches a query goes through [`decode`] first, so a malformed identifier is
//! rejected before the database is touched and is never read as key `0`.

use domain::{DomainError, DomainResult, EntityKind};
use thiserror::Error;

/// Storage-side primary key.
pub type Key = i64;

/// Reasons an identifier string is not a key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("identifier is empty")]
    Empty,

    #[error("identifier must contain only decimal digits")]
    NotDecimal,

    #[error("identifier exceeds the key range")]
    OutOfRange,
}

/// Parse a decimal identifier into a key.
///
/// Only ASCII digits are accepted: no sign, no whitespace, nothing trailing.
/// Leading zeros are allowed and dropped by [`encode_key`].
pub fn decode_key(raw: &str) -> Result<Key, KeyError> {
    if raw.is_empty() {
        return Err(KeyError::Empty);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KeyError::NotDecimal);
    }
    raw.parse::<Key>().map_err(|_| KeyError::OutOfRange)
}

/// Canonical decimal form of a key.
pub fn encode_key(key: Key) -> String {
    key.to_string()
}

/// Decode an identifier of `entity`, reporting failures as
/// [`DomainError::InvalidIdentifier`].
pub fn decode(entity: EntityKind, raw: &str) -> DomainResult<Key> {
    decode_key(raw).map_err(|_| DomainError::invalid_id(entity, raw))
}

/// Decode an identifier that may be absent; empty means "no key".
pub fn decode_optional(entity: EntityKind, raw: &str) -> DomainResult<Option<Key>> {
    if raw.is_empty() {
        return Ok(None);
    }
    decode(entity, raw).map(Some)
}
