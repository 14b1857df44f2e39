//! User repository implementation with partial updates.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::codec;
use domain::{DomainError, DomainResult, EntityKind, User, UserPatch, UserRepository};

/// SeaORM-backed implementation of [`UserRepository`]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, key: codec::Key) -> DomainResult<user::Model> {
        UserEntity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(DomainError::storage)?
            .ok_or_else(|| DomainError::not_found(EntityKind::User))
    }

    async fn find_by(&self, column: user::Column, value: &str) -> DomainResult<User> {
        UserEntity::find()
            .filter(column.eq(value))
            .one(&self.db)
            .await
            .map_err(DomainError::storage)?
            .map(User::from)
            .ok_or_else(|| DomainError::not_found(EntityKind::User))
    }
}

/// Decode the role of a patch. Undecodable ids are dropped from the update
/// instead of failing it.
fn patch_role_key(user_key: codec::Key, raw: Option<String>) -> Option<codec::Key> {
    let raw = raw?;
    match codec::decode_key(&raw) {
        Ok(key) => Some(key),
        Err(err) => {
            tracing::warn!(
                user_id = user_key,
                role_id = %raw,
                error = %err,
                "ignoring undecodable role id in user update"
            );
            None
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> DomainResult<User> {
        let key = codec::decode_optional(EntityKind::User, &user.id)?;
        let role_key = codec::decode(EntityKind::Role, &user.role_id)?;
        let now = Utc::now();
        let last_seen = if user.has_last_seen() { user.last_seen } else { now };

        let active_model = ActiveModel {
            id: key.map_or(NotSet, Set),
            username: Set(user.username),
            email: Set(user.email),
            hashed_password: Set(user.hashed_password),
            role_id: Set(role_key),
            last_seen: Set(last_seen),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(DomainError::storage)?;
        tracing::debug!(user_id = model.id, "user created");
        Ok(User::from(model))
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<User> {
        let key = codec::decode(EntityKind::User, id)?;
        self.find(key).await.map(User::from)
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<User> {
        self.find_by(user::Column::Email, email).await
    }

    async fn get_by_username(&self, username: &str) -> DomainResult<User> {
        self.find_by(user::Column::Username, username).await
    }

    async fn update(&self, patch: UserPatch) -> DomainResult<User> {
        let key = codec::decode(EntityKind::User, &patch.id)?;
        let current = self.find(key).await?;

        let UserPatch {
            username,
            email,
            hashed_password,
            role_id,
            last_seen,
            ..
        } = patch;
        let role_key = patch_role_key(key, role_id);

        // Same test as `UserPatch::is_empty`, but a skipped role id counts as not supplied
        if username.is_none()
            && email.is_none()
            && hashed_password.is_none()
            && role_key.is_none()
            && last_seen.is_none()
        {
            return Ok(User::from(current));
        }

        let mut active: ActiveModel = current.into();

        if let Some(username) = username {
            active.username = Set(username);
        }
        if let Some(email) = email {
            active.email = Set(email);
        }
        if let Some(hashed_password) = hashed_password {
            active.hashed_password = Set(hashed_password);
        }
        if let Some(role_key) = role_key {
            active.role_id = Set(role_key);
        }
        if let Some(last_seen) = last_seen {
            active.last_seen = Set(last_seen);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(DomainError::storage)?;
        tracing::debug!(user_id = model.id, "user updated");
        Ok(User::from(model))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let key = codec::decode(EntityKind::User, id)?;
        let result = UserEntity::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(DomainError::storage)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(EntityKind::User));
        }

        tracing::debug!(user_id = key, "user deleted");
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(DomainError::storage)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
