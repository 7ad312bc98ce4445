//! Reference catalog unit: asset types, leave types, contract types, job
//! categories, meeting rooms and salary components.
//!
//! Meeting-room floor locations are the one attribute drawn from the
//! fixture RNG; nothing downstream depends on the exact value.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rand::rngs::StdRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::models::{
    asset_type, contract_type, job_category, leave_type, meeting_room, salary_component,
};

use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

const ASSET_TYPES: [(&str, &str); 4] = [
    ("Laptop", "Portable workstation issued to staff"),
    ("Monitor", "External display"),
    ("Mobile Phone", "Company handset"),
    ("Access Card", "Building entry card"),
];

/// (name, days allowed, paid)
const LEAVE_TYPES: [(&str, i32, bool); 4] = [
    ("Annual Leave", 20, true),
    ("Sick Leave", 10, true),
    ("Casual Leave", 6, true),
    ("Unpaid Leave", 30, false),
];

const CONTRACT_TYPES: [(&str, &str); 4] = [
    ("Permanent", "Open-ended employment"),
    ("Fixed Term", "Employment with a set end date"),
    ("Probation", "Initial evaluation period"),
    ("Internship", "Temporary training engagement"),
];

const JOB_CATEGORIES: [(&str, &str); 3] = [
    ("Engineering", "Product and platform development"),
    ("Sales", "Revenue and account management"),
    ("Operations", "Back-office and facilities"),
];

const MEETING_ROOMS: [(&str, i32); 3] = [("Boardroom", 12), ("Huddle Room", 4), ("Training Room", 20)];

const FLOORS: [&str; 3] = ["Ground Floor", "1st Floor", "2nd Floor"];

/// (name, kind, monthly amount in cents)
const SALARY_COMPONENTS: [(&str, &str, i64); 5] = [
    ("Basic Salary", "earning", 250_000),
    ("House Rent Allowance", "earning", 100_000),
    ("Transport Allowance", "earning", 20_000),
    ("Provident Fund", "deduction", 30_000),
    ("Income Tax", "deduction", 45_000),
];

pub struct ReferenceCatalogSeeder;

#[async_trait]
impl SeedUnit for ReferenceCatalogSeeder {
    fn name(&self) -> &'static str {
        "reference catalogs"
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

impl ReferenceCatalogSeeder {
    async fn seed_tenant(
        &self,
        ctx: &SeedContext,
        tenant_id: Uuid,
        rng: &mut StdRng,
    ) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        for (name, description) in ASSET_TYPES {
            let exists = asset_type::Entity::find()
                .filter(asset_type::Column::TenantId.eq(tenant_id))
                .filter(asset_type::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = asset_type::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        for (name, days_allowed, is_paid) in LEAVE_TYPES {
            let exists = leave_type::Entity::find()
                .filter(leave_type::Column::TenantId.eq(tenant_id))
                .filter(leave_type::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = leave_type::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                days_allowed: Set(days_allowed),
                is_paid: Set(is_paid),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        for (name, description) in CONTRACT_TYPES {
            let exists = contract_type::Entity::find()
                .filter(contract_type::Column::TenantId.eq(tenant_id))
                .filter(contract_type::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = contract_type::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        for (name, description) in JOB_CATEGORIES {
            let exists = job_category::Entity::find()
                .filter(job_category::Column::TenantId.eq(tenant_id))
                .filter(job_category::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = job_category::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        for (name, capacity) in MEETING_ROOMS {
            let exists = meeting_room::Entity::find()
                .filter(meeting_room::Column::TenantId.eq(tenant_id))
                .filter(meeting_room::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let floor = FLOORS[rng.gen_range(0..FLOORS.len())];
            let model = meeting_room::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                capacity: Set(capacity),
                location: Set(Some(floor.to_string())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        for (name, kind, amount_cents) in SALARY_COMPONENTS {
            let exists = salary_component::Entity::find()
                .filter(salary_component::Column::TenantId.eq(tenant_id))
                .filter(salary_component::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = salary_component::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                kind: Set(kind.to_string()),
                amount_cents: Set(amount_cents),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        Ok(report)
    }
}
