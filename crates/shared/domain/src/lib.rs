//! Domain layer - user and role entities and their repository contracts.
//!
//! This crate has no storage dependency. Identifiers are opaque strings;
//! adapters translate them to whatever key type their engine uses.

pub mod error;
pub mod repository;
pub mod role;
pub mod user;

pub use error::{BoxError, DomainError, DomainResult, EntityKind};
pub use repository::{RoleRepository, UserRepository};
pub use role::Role;
pub use user::{User, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::{MockRoleRepository, MockUserRepository};
