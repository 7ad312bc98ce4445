//! Database seeding functionality.
//!
//! The fixture loader populates the schema with per-tenant reference data
//! and sample transactional records. Each entity group is a [`SeedUnit`];
//! the [`orchestrator`] runs them in dependency order. Every unit is
//! idempotent: rows are looked up by natural key and tenant before insert,
//! and a re-run changes nothing.

pub mod catalogs;
pub mod contracts;
pub mod employees;
pub mod leave;
pub mod onboarding;
pub mod orchestrator;
pub mod org;
pub mod payroll;
pub mod recruitment;
pub mod regularizations;
pub mod support;
pub mod tenants;
pub mod transitions;
pub mod work_policies;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::config::{AppConfig, Profile};
use crate::error::{SeedError, is_unique_violation};
use crate::models::tenant;

pub use orchestrator::{RunSummary, run};

/// Shared state handed to every seed unit.
///
/// Tenants are resolved once by the orchestrator after the bootstrap unit
/// and passed explicitly; units never re-derive them from ambient state.
pub struct SeedContext {
    pub db: Arc<DatabaseConnection>,
    pub config: AppConfig,
    pub profile: Profile,
    pub tenants: Vec<tenant::Model>,
}

impl SeedContext {
    /// A deterministic RNG for non-key fixture attributes.
    ///
    /// Seeded from configuration so repeated runs draw identical values.
    pub fn fixture_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.config.fixture_seed)
    }
}

/// Per-unit outcome counters, logged as the unit's summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnitReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl UnitReport {
    pub fn absorb(&mut self, other: UnitReport) {
        self.created += other.created;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// One self-contained routine populating one entity group.
#[async_trait]
pub trait SeedUnit: Send + Sync {
    fn name(&self) -> &'static str;

    /// Runs the unit over every tenant in the context.
    ///
    /// Per-row failures are contained inside the unit; an `Err` here means
    /// the unit itself could not run at all.
    async fn run(&self, ctx: &SeedContext) -> Result<UnitReport>;
}

/// Guard shared by every tenant-dependent unit: warn and no-op when no
/// tenants exist yet.
pub(crate) fn guard_tenants<'a>(unit: &str, ctx: &'a SeedContext) -> Option<&'a [tenant::Model]> {
    if ctx.tenants.is_empty() {
        log::warn!("{}: no tenants found, nothing to seed", unit);
        None
    } else {
        Some(&ctx.tenants)
    }
}

/// Folds a single insert attempt into the unit report.
///
/// Unique-key violations count as skips (the row already exists); any other
/// error is logged naming the fixture and tenant, and the loop moves on.
pub(crate) fn record_insert<T>(
    report: &mut UnitReport,
    fixture: &str,
    tenant_id: Uuid,
    result: Result<T, DbErr>,
) {
    match result {
        Ok(_) => {
            log::info!("created fixture '{}' for tenant {}", fixture, tenant_id);
            report.created += 1;
        }
        Err(err) if is_unique_violation(&err) => {
            log::info!(
                "fixture '{}' already exists for tenant {}, skipping",
                fixture,
                tenant_id
            );
            report.skipped += 1;
        }
        Err(err) => {
            let err = SeedError::RowInsert {
                fixture: fixture.to_string(),
                tenant_id,
                source: err,
            };
            log::error!("{}", err);
            report.failed += 1;
        }
    }
}

/// Logs the per-unit completion summary. Emitted regardless of partial
/// failures within the unit.
pub(crate) fn log_summary(unit: &str, report: &UnitReport) {
    log::info!(
        "{} completed: {} created, {} skipped, {} failed",
        unit,
        report.created,
        report.skipped,
        report.failed
    );
}
