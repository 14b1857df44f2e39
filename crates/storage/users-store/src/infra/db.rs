//! Database handle and schema management.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use super::migrations::Migrator;
use crate::config::StoreConfig;

/// Schema change requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Apply pending migrations
    Up,
    /// Revert the most recent migration
    Down,
    /// Report only
    Status,
    /// Drop all tables and migrate from scratch
    Fresh,
}

/// One known migration and whether the database has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Connection handle shared by the repositories.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection and bring the schema up to date.
    pub async fn connect(config: &StoreConfig) -> Result<Self, DbErr> {
        let db = Self::open(config).await?;
        db.migrate(MigrateAction::Up).await?;
        Ok(db)
    }

    /// Open a connection and leave the schema as it is.
    pub async fn open(config: &StoreConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.sqlx_logging(config.sql_logging);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Handle to pass into a repository.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply `action` and report the resulting state of every migration.
    pub async fn migrate(&self, action: MigrateAction) -> Result<Vec<MigrationState>, DbErr> {
        match action {
            MigrateAction::Up => Migrator::up(&self.connection, None).await?,
            MigrateAction::Down => Migrator::down(&self.connection, Some(1)).await?,
            MigrateAction::Fresh => Migrator::fresh(&self.connection).await?,
            MigrateAction::Status => {}
        }
        if action != MigrateAction::Status {
            tracing::info!(?action, "schema migrated");
        }

        let states = Migrator::get_migration_with_status(&self.connection)
            .await?
            .into_iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            })
            .collect();

        Ok(states)
    }

    /// Round-trip to the server.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
