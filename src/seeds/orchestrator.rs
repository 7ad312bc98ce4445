//! Runs the seed units in dependency order.
//!
//! The tenant bootstrap always runs first; the remaining units only run on
//! the demo profile and receive the freshly resolved tenant list. A unit
//! that fails outright is logged and the run moves on to the next unit, so
//! one broken fixture group never blocks the rest of the data set.

use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use sea_orm::DatabaseConnection;

use crate::config::{AppConfig, Profile};
use crate::repositories::TenantRepository;

use super::catalogs::ReferenceCatalogSeeder;
use super::contracts::ContractSeeder;
use super::employees::EmployeeSeeder;
use super::leave::LeaveSeeder;
use super::onboarding::OnboardingSeeder;
use super::org::OrgStructureSeeder;
use super::payroll::PayrollSeeder;
use super::recruitment::RecruitmentSeeder;
use super::regularizations::RegularizationSeeder;
use super::tenants::TenantSeeder;
use super::transitions::TransitionSeeder;
use super::work_policies::WorkPolicySeeder;
use super::{SeedContext, SeedUnit, UnitReport};

/// Outcome of a full orchestrated run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Per-unit counters in execution order.
    pub units: Vec<(&'static str, UnitReport)>,
    pub totals: UnitReport,
    /// Units that returned an error instead of a report.
    pub failed_units: Vec<&'static str>,
}

impl RunSummary {
    fn record(&mut self, name: &'static str, report: UnitReport) {
        self.totals.absorb(report);
        self.units.push((name, report));
    }
}

/// Seeds the database for the given profile.
///
/// Always returns `Ok`: per-row failures are contained inside units, and
/// unit-level failures are recorded on the summary. Callers decide what to
/// surface.
pub async fn run(
    db: Arc<DatabaseConnection>,
    config: &AppConfig,
    profile: Profile,
) -> Result<RunSummary> {
    info!("starting fixture load ({} profile)", profile);

    let mut summary = RunSummary::default();

    let bootstrap_ctx = SeedContext {
        db: db.clone(),
        config: config.clone(),
        profile,
        tenants: Vec::new(),
    };
    let bootstrap = TenantSeeder;
    run_unit(&bootstrap, &bootstrap_ctx, &mut summary).await;

    if profile == Profile::Minimal {
        info!(
            "fixture load complete: {} created, {} skipped, {} failed",
            summary.totals.created, summary.totals.skipped, summary.totals.failed
        );
        return Ok(summary);
    }

    let tenants = TenantRepository::new(db.clone()).list_all().await?;
    let ctx = SeedContext {
        db,
        config: config.clone(),
        profile,
        tenants,
    };

    let units: Vec<Box<dyn SeedUnit>> = vec![
        Box::new(OrgStructureSeeder),
        Box::new(EmployeeSeeder),
        Box::new(ReferenceCatalogSeeder),
        Box::new(WorkPolicySeeder),
        Box::new(OnboardingSeeder),
        Box::new(ContractSeeder),
        Box::new(LeaveSeeder),
        Box::new(RecruitmentSeeder),
        Box::new(PayrollSeeder),
        Box::new(TransitionSeeder),
        Box::new(RegularizationSeeder),
    ];

    for unit in &units {
        run_unit(unit.as_ref(), &ctx, &mut summary).await;
    }

    info!(
        "fixture load complete: {} created, {} skipped, {} failed ({} unit errors)",
        summary.totals.created,
        summary.totals.skipped,
        summary.totals.failed,
        summary.failed_units.len()
    );

    Ok(summary)
}

async fn run_unit(unit: &dyn SeedUnit, ctx: &SeedContext, summary: &mut RunSummary) {
    match unit.run(ctx).await {
        Ok(report) => summary.record(unit.name(), report),
        Err(err) => {
            error!("seed unit '{}' failed: {:#}", unit.name(), err);
            summary.failed_units.push(unit.name());
        }
    }
}
