//! Payroll runs and sample time entries.
//!
//! Three monthly runs per tenant, and one work week of time entries per
//! employee. Check-in and check-out jitter comes from the fixture RNG so
//! re-runs with the same seed produce identical timestamps.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use rand::Rng;
use rand::rngs::StdRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::models::{payroll_run, time_entry};
use crate::repositories::EmployeeRepository;

use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

/// (year, month, status)
const PAYROLL_RUNS: [(i32, i32, &str); 3] = [
    (2025, 3, "completed"),
    (2025, 4, "completed"),
    (2025, 5, "processing"),
];

const WORK_WEEK_DAYS: i64 = 5;

pub struct PayrollSeeder;

#[async_trait]
impl SeedUnit for PayrollSeeder {
    fn name(&self) -> &'static str {
        "payroll"
    }

    async fn run(&self, ctx: &SeedContext) -> Result<UnitReport> {
        let mut report = UnitReport::default();
        let Some(tenants) = guard_tenants(self.name(), ctx) else {
            return Ok(report);
        };

        let mut rng = ctx.fixture_rng();

        for tenant in tenants {
            report.absorb(self.seed_tenant(ctx, tenant.id, &mut rng).await?);
        }

        log_summary(self.name(), &report);
        Ok(report)
    }
}

impl PayrollSeeder {
    async fn seed_tenant(
        &self,
        ctx: &SeedContext,
        tenant_id: Uuid,
        rng: &mut StdRng,
    ) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        for (year, month, status) in PAYROLL_RUNS {
            let exists = payroll_run::Entity::find()
                .filter(payroll_run::Column::TenantId.eq(tenant_id))
                .filter(payroll_run::Column::PeriodYear.eq(year))
                .filter(payroll_run::Column::PeriodMonth.eq(month))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = payroll_run::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                period_year: Set(year),
                period_month: Set(month),
                status: Set(status.to_string()),
                processed_at: Set((status == "completed").then(|| Utc::now().into())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(
                &mut report,
                &format!("{}-{:02} payroll run", year, month),
                tenant_id,
                model.insert(&*ctx.db).await,
            );
        }

        report.absorb(self.seed_time_entries(ctx, tenant_id, rng).await?);

        Ok(report)
    }

    /// One entry per employee per day, Monday through Friday of one week.
    async fn seed_time_entries(
        &self,
        ctx: &SeedContext,
        tenant_id: Uuid,
        rng: &mut StdRng,
    ) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let Some(week_start) = NaiveDate::from_ymd_opt(2025, 5, 5) else {
            return Ok(report);
        };
        let (Some(in_base), Some(out_base)) = (
            NaiveTime::from_hms_opt(9, 0, 0),
            NaiveTime::from_hms_opt(17, 0, 0),
        ) else {
            return Ok(report);
        };

        let repo = EmployeeRepository::new(ctx.db.clone());
        for employee in repo.list_for_tenant(tenant_id).await? {
            for day in 0..WORK_WEEK_DAYS {
                let work_date = week_start + Duration::days(day);
                let exists = time_entry::Entity::find()
                    .filter(time_entry::Column::EmployeeId.eq(employee.id))
                    .filter(time_entry::Column::WorkDate.eq(work_date))
                    .one(&*ctx.db)
                    .await?
                    .is_some();
                if exists {
                    report.skipped += 1;
                    continue;
                }

                let check_in = in_base + Duration::minutes(rng.gen_range(0..=25));
                let check_out = out_base + Duration::minutes(rng.gen_range(0..=40));

                let model = time_entry::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    tenant_id: Set(tenant_id),
                    employee_id: Set(employee.id),
                    work_date: Set(work_date),
                    check_in: Set(check_in),
                    check_out: Set(check_out),
                    created_at: Set(Utc::now().into()),
                };
                record_insert(
                    &mut report,
                    &employee.email,
                    tenant_id,
                    model.insert(&*ctx.db).await,
                );
            }
        }

        Ok(report)
    }
}
