//! Shifts and attendance policies, plus the employee back-fill pass.
//!
//! After the policy rows exist, every employee with no shift or no
//! attendance policy is assigned the tenant's default one. Employees who
//! already carry an assignment are left untouched.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveTime, Utc};
use log::warn;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::models::{attendance_policy, shift};
use crate::repositories::EmployeeRepository;

use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

/// (name, start hour:min, end hour:min, default)
const SHIFTS: [(&str, (u32, u32), (u32, u32), bool); 3] = [
    ("Morning Shift", (9, 0), (17, 0), true),
    ("Evening Shift", (13, 0), (21, 0), false),
    ("Night Shift", (21, 0), (5, 0), false),
];

/// (name, grace minutes, default)
const ATTENDANCE_POLICIES: [(&str, i32, bool); 3] = [
    ("Standard Attendance Policy", 15, true),
    ("Flexible Attendance Policy", 30, false),
    ("Strict Attendance Policy", 5, false),
];

pub struct WorkPolicySeeder;

#[async_trait]
impl SeedUnit for WorkPolicySeeder {
    fn name(&self) -> &'static str {
        "work policies"
    }

    async fn run(&self, ctx: &SeedContext) -> Result<UnitReport> {
        let mut report = UnitReport::default();
        let Some(tenants) = guard_tenants(self.name(), ctx) else {
            return Ok(report);
        };

        for tenant in tenants {
            report.absorb(self.seed_tenant(ctx, tenant.id).await?);
        }

        log_summary(self.name(), &report);
        Ok(report)
    }
}

impl WorkPolicySeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant_id: Uuid) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        for (name, (sh, sm), (eh, em), is_default) in SHIFTS {
            let exists = shift::Entity::find()
                .filter(shift::Column::TenantId.eq(tenant_id))
                .filter(shift::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let Some(starts_at) = NaiveTime::from_hms_opt(sh, sm, 0) else {
                continue;
            };
            let Some(ends_at) = NaiveTime::from_hms_opt(eh, em, 0) else {
                continue;
            };
            let model = shift::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                starts_at: Set(starts_at),
                ends_at: Set(ends_at),
                is_default: Set(is_default),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        for (name, grace_minutes, is_default) in ATTENDANCE_POLICIES {
            let exists = attendance_policy::Entity::find()
                .filter(attendance_policy::Column::TenantId.eq(tenant_id))
                .filter(attendance_policy::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = attendance_policy::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                grace_minutes: Set(grace_minutes),
                is_default: Set(is_default),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        self.backfill_assignments(ctx, tenant_id).await?;

        Ok(report)
    }

    /// Assigns the default shift and attendance policy to employees that
    /// have none. Only NULL columns are written.
    async fn backfill_assignments(&self, ctx: &SeedContext, tenant_id: Uuid) -> Result<()> {
        let default_shift = shift::Entity::find()
            .filter(shift::Column::TenantId.eq(tenant_id))
            .filter(shift::Column::IsDefault.eq(true))
            .one(&*ctx.db)
            .await?;
        let default_policy = attendance_policy::Entity::find()
            .filter(attendance_policy::Column::TenantId.eq(tenant_id))
            .filter(attendance_policy::Column::IsDefault.eq(true))
            .one(&*ctx.db)
            .await?;

        if default_shift.is_none() && default_policy.is_none() {
            warn!(
                "work policies: tenant {} has no default shift or policy, skipping back-fill",
                tenant_id
            );
            return Ok(());
        }

        let repo = EmployeeRepository::new(ctx.db.clone());
        for employee in repo.list_for_tenant(tenant_id).await? {
            if let Some(shift) = &default_shift {
                repo.assign_shift_if_unset(&employee, shift.id).await?;
            }
            if let Some(policy) = &default_policy {
                repo.assign_attendance_policy_if_unset(&employee, policy.id)
                    .await?;
            }
        }
        Ok(())
    }
}
