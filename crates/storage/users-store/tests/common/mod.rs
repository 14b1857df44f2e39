//! Shared helpers for repository integration tests.
//!
//! Every call to [`stores`] opens a separate in-memory SQLite database, so
//! tests never see each other's rows.

#![allow(dead_code)]

use domain::{Role, RoleRepository, User, UserRepository};
use users_store_lib::config::StoreConfig;
use users_store_lib::Stores;

pub async fn stores() -> Stores {
    Stores::connect(&StoreConfig::in_memory())
        .await
        .expect("Failed to open in-memory database")
}

pub async fn create_test_role(stores: &Stores) -> Role {
    stores
        .roles
        .create(Role::new("test-role"))
        .await
        .expect("Failed to create role")
}

pub async fn create_test_user(stores: &Stores, role_id: &str) -> User {
    let user = User {
        email: "test@example.com".to_string(),
        username: "testuser".to_string(),
        hashed_password: "hashedpw".to_string(),
        role_id: role_id.to_string(),
        ..Default::default()
    };

    stores
        .users
        .create(user)
        .await
        .expect("Failed to create user")
}
