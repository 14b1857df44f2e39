//! Repository contracts implemented by storage adapters.

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::role::Role;
use crate::user::{User, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Store a new role. An empty `id` lets the storage engine assign one.
    async fn create(&self, role: Role) -> DomainResult<Role>;

    /// Find role by identifier
    async fn get_by_id(&self, id: &str) -> DomainResult<Role>;

    /// Find role by its unique name
    async fn get_by_name(&self, name: &str) -> DomainResult<Role>;

    /// Replace the role's name
    async fn update(&self, role: Role) -> DomainResult<Role>;

    /// Delete role; fails with `RoleNotFound` when nothing was deleted
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// List all roles
    async fn list(&self) -> DomainResult<Vec<Role>>;
}

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user. An empty `id` lets the storage engine assign one.
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Find user by identifier
    async fn get_by_id(&self, id: &str) -> DomainResult<User>;

    /// Find user by email address
    async fn get_by_email(&self, email: &str) -> DomainResult<User>;

    /// Find user by username
    async fn get_by_username(&self, username: &str) -> DomainResult<User>;

    /// Apply the supplied fields of `patch`, leaving the rest untouched
    async fn update(&self, patch: UserPatch) -> DomainResult<User>;

    /// Delete user; fails with `UserNotFound` when nothing was deleted
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// List all users
    async fn list(&self) -> DomainResult<Vec<User>>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::{DomainError, EntityKind};

    #[tokio::test]
    async fn mocked_role_repository_reports_not_found() {
        let mut repo = MockRoleRepository::new();
        repo.expect_get_by_id()
            .withf(|id| id == "42")
            .returning(|_| Err(DomainError::RoleNotFound));

        let repo: Arc<dyn RoleRepository> = Arc::new(repo);
        let result = repo.get_by_id("42").await;

        assert!(matches!(result, Err(DomainError::RoleNotFound)));
    }

    #[tokio::test]
    async fn mocked_user_repository_returns_patched_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(|patch| patch.id == "1" && patch.username.as_deref() == Some("new-name"))
            .returning(|patch| {
                Ok(User {
                    id: patch.id,
                    username: patch.username.unwrap_or_default(),
                    ..Default::default()
                })
            });
        repo.expect_get_by_id()
            .returning(|id| Err(DomainError::invalid_id(EntityKind::User, id)));

        let repo: Arc<dyn UserRepository> = Arc::new(repo);

        let updated = repo.update(UserPatch::new("1").username("new-name")).await.unwrap();
        assert_eq!(updated.username, "new-name");

        let err = repo.get_by_id("nope").await.unwrap_err();
        assert!(err.is_invalid_identifier());
    }
}
