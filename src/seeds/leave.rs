//! Leave applications, one per employee, patterned by index.
//!
//! Status and reason cycle through a fixed pattern list; the leave type
//! rotates through the paid catalog entries. Approver columns are only
//! populated for statuses a manager has acted on.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use log::warn;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::error::SeedError;
use crate::models::{leave_application, leave_type, tenant};
use crate::repositories::EmployeeRepository;

use super::support::pattern_at;
use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

/// (status, reason)
const LEAVE_PATTERNS: [(&str, &str); 3] = [
    ("approved", "Family vacation"),
    ("pending", "Medical appointment"),
    ("rejected", "Peak season travel"),
];

const LEAVE_TYPE_ROTATION: [&str; 3] = ["Annual Leave", "Sick Leave", "Casual Leave"];

/// Statuses that carry an approver decision.
fn is_decided(status: &str) -> bool {
    matches!(status, "approved" | "rejected")
}

pub struct LeaveSeeder;

#[async_trait]
impl SeedUnit for LeaveSeeder {
    fn name(&self) -> &'static str {
        "leave applications"
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

impl LeaveSeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant: &tenant::Model) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let types = leave_type::Entity::find()
            .filter(leave_type::Column::TenantId.eq(tenant.id))
            .all(&*ctx.db)
            .await?;
        if types.is_empty() {
            warn!(
                "leave: {}",
                SeedError::MissingPrerequisite {
                    tenant_id: tenant.id,
                    what: "leave types",
                }
            );
            return Ok(report);
        }

        let Some(base_date) = NaiveDate::from_ymd_opt(2025, 6, 2) else {
            return Ok(report);
        };

        let repo = EmployeeRepository::new(ctx.db.clone());
        for (idx, employee) in repo.list_for_tenant(tenant.id).await?.iter().enumerate() {
            let (status, reason) = *pattern_at(&LEAVE_PATTERNS, idx);
            let type_name = *pattern_at(&LEAVE_TYPE_ROTATION, idx);
            let Some(leave_type) = types.iter().find(|t| t.name == type_name) else {
                warn!(
                    "leave: tenant {} is missing leave type {:?}, skipping {}",
                    tenant.id, type_name, employee.email
                );
                continue;
            };

            let from_date = base_date + Duration::days(idx as i64 * 7);
            let exists = leave_application::Entity::find()
                .filter(leave_application::Column::EmployeeId.eq(employee.id))
                .filter(leave_application::Column::FromDate.eq(from_date))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }

            let decided = is_decided(status);
            let model = leave_application::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant.id),
                employee_id: Set(employee.id),
                leave_type_id: Set(leave_type.id),
                from_date: Set(from_date),
                to_date: Set(from_date + Duration::days(2)),
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
