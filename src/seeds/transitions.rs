//! Employee transitions: promotions and one sample resignation.
//!
//! Every other employee (even index) gets a promotion into the next
//! seniority level within their department; employees already at the top
//! of their track are skipped. The last employee in the stable ordering
//! gets the resignation record.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::warn;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::models::{designation, employee, promotion, resignation, tenant};
use crate::repositories::EmployeeRepository;

use super::support::pattern_at;
use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

const PROMOTION_STATUSES: [&str; 2] = ["approved", "pending"];

const RESIGNATION_REASON: &str = "Relocating to another city";

pub struct TransitionSeeder;

#[async_trait]
impl SeedUnit for TransitionSeeder {
    fn name(&self) -> &'static str {
        "transitions"
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

impl TransitionSeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant: &tenant::Model) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let repo = EmployeeRepository::new(ctx.db.clone());
        let staff = repo.list_for_tenant(tenant.id).await?;
        if staff.is_empty() {
            warn!("transitions: tenant {} has no employees, skipping", tenant.id);
            return Ok(report);
        }

        let Some(promoted_on) = NaiveDate::from_ymd_opt(2025, 5, 15) else {
            return Ok(report);
        };

        let mut promotion_slot = 0usize;
        for (idx, person) in staff.iter().enumerate() {
            if idx % 2 != 0 {
                continue;
            }
            let Some(next) = self.next_designation(ctx, person).await? else {
                continue;
            };

            let exists = promotion::Entity::find()
                .filter(promotion::Column::EmployeeId.eq(person.id))
                .filter(promotion::Column::PromotedOn.eq(promoted_on))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                promotion_slot += 1;
                continue;
            }

            let status = *pattern_at(&PROMOTION_STATUSES, promotion_slot);
            promotion_slot += 1;
            let approved = status == "approved";

            let model = promotion::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant.id),
                employee_id: Set(person.id),
                designation_id: Set(next.id),
                promoted_on: Set(promoted_on),
                status: Set(status.to_string()),
                approved_by: Set(approved.then_some(tenant.id)),
                approved_at: Set(approved.then(|| Utc::now().into())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(
                &mut report,
                &person.email,
                tenant.id,
                model.insert(&*ctx.db).await,
            );
        }

        if let Some(leaver) = staff.last() {
            report.absorb(self.seed_resignation(ctx, tenant.id, leaver).await?);
        }

        Ok(report)
    }

    /// The lowest designation in the employee's department with a strictly
    /// higher level than their current one.
    async fn next_designation(
        &self,
        ctx: &SeedContext,
        person: &employee::Model,
    ) -> Result<Option<designation::Model>> {
        let current = designation::Entity::find_by_id(person.designation_id)
            .one(&*ctx.db)
            .await?;
        let Some(current) = current else {
            return Ok(None);
        };

        let mut candidates = designation::Entity::find()
            .filter(designation::Column::DepartmentId.eq(person.department_id))
            .filter(designation::Column::Level.gt(current.level))
            .all(&*ctx.db)
            .await?;
        candidates.sort_by_key(|d| d.level);
        Ok(candidates.into_iter().next())
    }

    async fn seed_resignation(
        &self,
        ctx: &SeedContext,
        tenant_id: Uuid,
        leaver: &employee::Model,
    ) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let exists = resignation::Entity::find()
            .filter(resignation::Column::EmployeeId.eq(leaver.id))
            .one(&*ctx.db)
            .await?
            .is_some();
        if exists {
            report.skipped += 1;
            return Ok(report);
        }

        let (Some(notice_date), Some(last_working_day)) = (
            NaiveDate::from_ymd_opt(2025, 5, 1),
            NaiveDate::from_ymd_opt(2025, 6, 30),
        ) else {
            return Ok(report);
        };

        let model = resignation::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(tenant_id),
            employee_id: Set(leaver.id),
            notice_date: Set(notice_date),
            last_working_day: Set(last_working_day),
            status: Set("accepted".to_string()),
            reason: Set(RESIGNATION_REASON.to_string()),
            created_at: Set(Utc::now().into()),
        };
        record_insert(
            &mut report,
            &leaver.email,
            tenant_id,
            model.insert(&*ctx.db).await,
        );

        Ok(report)
    }
}
