//! Role repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use super::entities::role::{self, ActiveModel, Entity as RoleEntity};
use crate::codec;
use domain::{DomainError, DomainResult, EntityKind, Role, RoleRepository};

/// SeaORM-backed implementation of [`RoleRepository`]
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, key: codec::Key) -> DomainResult<role::Model> {
        RoleEntity::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(DomainError::storage)?
            .ok_or_else(|| DomainError::not_found(EntityKind::Role))
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn create(&self, role: Role) -> DomainResult<Role> {
        let key = codec::decode_optional(EntityKind::Role, &role.id)?;
        let now = Utc::now();
        let active_model = ActiveModel {
            id: key.map_or(NotSet, Set),
            name: Set(role.name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(DomainError::storage)?;
        tracing::debug!(role_id = model.id, "role created");
        Ok(Role::from(model))
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Role> {
        let key = codec::decode(EntityKind::Role, id)?;
        self.find(key).await.map(Role::from)
    }

    async fn get_by_name(&self, name: &str) -> DomainResult<Role> {
        RoleEntity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(DomainError::storage)?
            .map(Role::from)
            .ok_or_else(|| DomainError::not_found(EntityKind::Role))
    }

    async fn update(&self, role: Role) -> DomainResult<Role> {
        let key = codec::decode(EntityKind::Role, &role.id)?;
        let current = self.find(key).await?;

        let mut active: ActiveModel = current.into();
        active.name = Set(role.name);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(DomainError::storage)?;
        tracing::debug!(role_id = model.id, "role updated");
        Ok(Role::from(model))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let key = codec::decode(EntityKind::Role, id)?;
        let result = RoleEntity::delete_by_id(key)
            .exec(&self.db)
            .await
            .map_err(DomainError::storage)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(EntityKind::Role));
        }

        tracing::debug!(role_id = key, "role deleted");
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(DomainError::storage)?;

        Ok(models.into_iter().map(Role::from).collect())
    }
}
