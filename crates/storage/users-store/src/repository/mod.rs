//! Repository layer for data access.
//!
//! `RoleStore` and `UserStore` implement the contracts from the `domain`
//! crate over SeaORM. Each holds its own clone of the connection handle.

pub mod entities;
mod role_repository;
mod user_repository;

pub use role_repository::RoleStore;
pub use user_repository::UserStore;
