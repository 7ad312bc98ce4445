//! Attendance regularization requests, one per employee.
//!
//! Status and reason come from a four-entry pattern list cycled by
//! employee index. Approver columns follow the decided statuses.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::models::{attendance_regularization, tenant};
use crate::repositories::EmployeeRepository;

use super::support::pattern_at;
use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

/// (status, reason)
const REGULARIZATION_PATTERNS: [(&str, &str); 4] = [
    ("pending", "Traffic jam caused delay in reaching office"),
    ("approved", "Forgot to punch out after evening shift"),
    ("rejected", "Reported on-site client visit without prior intimation"),
    ("approved", "Badge reader failed at the main gate"),
];

pub struct RegularizationSeeder;

#[async_trait]
impl SeedUnit for RegularizationSeeder {
    fn name(&self) -> &'static str {
        "attendance regularizations"
    }

    async fn run(&self, ctx: &SeedContext) -> Result<UnitReport> {
        let mut report = UnitReport::default();
        let Some(tenants) = guard_tenants(self.name(), ctx) else {
            return Ok(report);
        };

        for tenant in tenants {
            report.absorb(self.seed_tenant(ctx, tenant).await?);
        }

        log_summary(self.name(), &report);
        Ok(report)
    }
}

impl RegularizationSeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant: &tenant::Model) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let Some(base_date) = NaiveDate::from_ymd_opt(2025, 5, 12) else {
            return Ok(report);
        };

        let repo = EmployeeRepository::new(ctx.db.clone());
        for (idx, employee) in repo.list_for_tenant(tenant.id).await?.iter().enumerate() {
            let (status, reason) = *pattern_at(&REGULARIZATION_PATTERNS, idx);
            let work_date = base_date + Duration::days(idx as i64);

            let exists = attendance_regularization::Entity::find()
                .filter(attendance_regularization::Column::EmployeeId.eq(employee.id))
                .filter(attendance_regularization::Column::WorkDate.eq(work_date))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }

            let decided = matches!(status, "approved" | "rejected");
            let model = attendance_regularization::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant.id),
                employee_id: Set(employee.id),
                work_date: Set(work_date),
                status: Set(status.to_string()),
                reason: Set(reason.to_string()),
                approved_by: Set(decided.then_some(tenant.id)),
                approved_at: Set(decided.then(|| Utc::now().into())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(
                &mut report,
                &employee.email,
                tenant.id,
                model.insert(&*ctx.db).await,
            );
        }

        Ok(report)
    }
}
