//! Users Store Library
//!
//! SeaORM adapter for the `domain` user and role repositories. Domain
//! identifiers are strings; the tables are keyed by integers, and the
//! [`codec`] module is the only place that translates between the two.

pub mod codec;
pub mod config;
pub mod infra;
pub mod repository;

use sea_orm::DbErr;
use tracing::info;

use crate::config::StoreConfig;
use crate::infra::Database;

pub use crate::infra::{MigrateAction, MigrationState};
pub use crate::repository::{RoleStore, UserStore};

/// Both repositories sharing one connection handle.
pub struct Stores {
    pub roles: RoleStore,
    pub users: UserStore,
}

impl Stores {
    /// Build repositories over an already connected database.
    pub fn new(db: &Database) -> Self {
        Self {
            roles: RoleStore::new(db.get_connection()),
            users: UserStore::new(db.get_connection()),
        }
    }

    /// Connect, apply the schema and build repositories.
    pub async fn connect(config: &StoreConfig) -> Result<Self, DbErr> {
        let db = Database::connect(config).await?;
        Ok(Self::new(&db))
    }
}

/// Run a schema command and report every migration's state afterwards.
pub async fn run_migrations(
    config: &StoreConfig,
    action: MigrateAction,
) -> Result<Vec<MigrationState>, DbErr> {
    Database::open(config).await?.migrate(action).await
}

/// Check that the configured database answers queries.
pub async fn check_connection(config: &StoreConfig) -> Result<(), DbErr> {
    Database::open(config).await?.ping().await?;
    info!("Database reachable");
    Ok(())
}
