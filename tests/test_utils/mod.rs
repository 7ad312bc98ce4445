//! Test utilities for database testing.
//!
//! Sets up in-memory SQLite databases with migrations applied so the seed
//! units can run against a real schema without a Postgres instance.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use seeder::config::{AppConfig, Profile};
use seeder::repositories::TenantRepository;
use seeder::seeds::SeedContext;
use std::sync::Arc;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<Arc<DatabaseConnection>> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    // SQLite does not enforce our Postgres foreign key semantics; disable FK
    // checks so fixtures that reference cross-table rows insert cleanly.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = OFF".to_string(),
    ))
    .await?;

    Ok(Arc::new(db))
}

/// A demo-profile configuration pointed at nothing in particular; the
/// connection is handed to units directly so the URL never gets used.
#[allow(dead_code)]
pub fn demo_config(saas_install: bool) -> AppConfig {
    AppConfig {
        profile: "demo".to_string(),
        saas_install,
        ..AppConfig::default()
    }
}

/// Builds a demo seed context over whatever tenants currently exist.
#[allow(dead_code)]
pub async fn demo_context(db: Arc<DatabaseConnection>, saas_install: bool) -> Result<SeedContext> {
    let tenants = TenantRepository::new(db.clone()).list_all().await?;
    Ok(SeedContext {
        db,
        config: demo_config(saas_install),
        profile: Profile::Demo,
        tenants,
    })
}
