//! Organisational structure unit: branches, departments, designations.
//!
//! Strictly ordered within the unit: departments resolve their branch by
//! name within the same tenant, designations resolve their department the
//! same way.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::models::{branch, department, designation};

use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

const BRANCHES: [(&str, &str); 2] = [
    ("Head Office", "Metropolis"),
    ("Regional Office", "Smallville"),
];

/// (name, index into BRANCHES)
const DEPARTMENTS: [(&str, usize); 4] = [
    ("Engineering", 0),
    ("Human Resources", 0),
    ("Finance", 0),
    ("Sales", 1),
];

/// (name, department name, level)
const DESIGNATIONS: [(&str, &str, i32); 8] = [
    ("Software Engineer", "Engineering", 1),
    ("Senior Software Engineer", "Engineering", 2),
    ("Engineering Manager", "Engineering", 3),
    ("HR Generalist", "Human Resources", 1),
    ("HR Manager", "Human Resources", 2),
    ("Accountant", "Finance", 1),
    ("Sales Executive", "Sales", 1),
    ("Sales Manager", "Sales", 2),
];

pub struct OrgStructureSeeder;

#[async_trait]
impl SeedUnit for OrgStructureSeeder {
    fn name(&self) -> &'static str {
        "org structure"
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

impl OrgStructureSeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant_id: Uuid) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        for (name, city) in BRANCHES {
            let existing = branch::Entity::find()
                .filter(branch::Column::TenantId.eq(tenant_id))
                .filter(branch::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?;
            if existing.is_some() {
                report.skipped += 1;
                continue;
            }

            let model = branch::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                city: Set(Some(city.to_string())),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        let branches = branch::Entity::find()
            .filter(branch::Column::TenantId.eq(tenant_id))
            .all(&*ctx.db)
            .await?;
        if branches.is_empty() {
            log::warn!(
                "org structure: no branches for tenant {}, skipping departments",
                tenant_id
            );
            return Ok(report);
        }

        for (name, branch_index) in DEPARTMENTS {
            let existing = department::Entity::find()
                .filter(department::Column::TenantId.eq(tenant_id))
                .filter(department::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?;
            if existing.is_some() {
                report.skipped += 1;
                continue;
            }

            // Resolve by fixture name so a partially seeded tenant still
            // attaches to the right branch; wrap as a safety net.
            let parent = branches
                .iter()
                .find(|b| b.name == BRANCHES[branch_index].0)
                .unwrap_or(&branches[branch_index % branches.len()]);

            let model = department::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                branch_id: Set(parent.id),
                name: Set(name.to_string()),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        let departments = department::Entity::find()
            .filter(department::Column::TenantId.eq(tenant_id))
            .all(&*ctx.db)
            .await?;
        if departments.is_empty() {
            log::warn!(
                "org structure: no departments for tenant {}, skipping designations",
                tenant_id
            );
            return Ok(report);
        }

        for (name, department_name, level) in DESIGNATIONS {
            let existing = designation::Entity::find()
                .filter(designation::Column::TenantId.eq(tenant_id))
                .filter(designation::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?;
            if existing.is_some() {
                report.skipped += 1;
                continue;
            }

            let Some(parent) = departments.iter().find(|d| d.name == department_name) else {
                log::warn!(
                    "org structure: department '{}' missing for tenant {}, skipping designation '{}'",
                    department_name,
                    tenant_id,
                    name
                );
                report.failed += 1;
                continue;
            };

            let model = designation::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                department_id: Set(parent.id),
                name: Set(name.to_string()),
                level: Set(level),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        Ok(report)
    }
}
