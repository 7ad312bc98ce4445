//! Onboarding checklist templates and the checklist back-fill pass.
//!
//! Template selection runs keyword containment against the employee's job
//! title in rule order; employees matching nothing fall back to the
//! default checklist, then to the first one available.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::json;
use uuid::Uuid;

use crate::models::onboarding_checklist;
use crate::repositories::EmployeeRepository;

use super::support::{match_template, pick_template};
use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

/// Keyword rules in priority order. A title matching several keywords
/// resolves to the earliest rule.
const CHECKLIST_RULES: [(&str, &str); 5] = [
    ("engineer", "Engineering Onboarding"),
    ("developer", "Engineering Onboarding"),
    ("sales", "Sales Onboarding"),
    ("hr", "People Operations Onboarding"),
    ("people", "People Operations Onboarding"),
];

pub struct OnboardingSeeder;

#[async_trait]
impl SeedUnit for OnboardingSeeder {
    fn name(&self) -> &'static str {
        "onboarding checklists"
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

fn checklist_templates() -> Vec<(&'static str, serde_json::Value, bool)> {
    vec![
        (
            "Engineering Onboarding",
            json!([
                "Provision laptop and development environment",
                "Grant repository and CI access",
                "Pair with onboarding buddy for first sprint",
                "Complete secure coding training",
            ]),
            false,
        ),
        (
            "Sales Onboarding",
            json!([
                "Set up CRM account",
                "Shadow two discovery calls",
                "Review pricing and discount policy",
            ]),
            false,
        ),
        (
            "People Operations Onboarding",
            json!([
                "Grant HRIS admin access",
                "Review payroll calendar",
                "Walk through leave approval workflow",
            ]),
            false,
        ),
        (
            "General Onboarding",
            json!([
                "Sign employment documents",
                "Collect access card",
                "Attend company orientation",
            ]),
            true,
        ),
    ]
}

impl OnboardingSeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant_id: Uuid) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        for (name, items, is_default) in checklist_templates() {
            let exists = onboarding_checklist::Entity::find()
                .filter(onboarding_checklist::Column::TenantId.eq(tenant_id))
                .filter(onboarding_checklist::Column::Name.eq(name))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }
            let model = onboarding_checklist::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                name: Set(name.to_string()),
                items: Set(items),
                is_default: Set(is_default),
                created_at: Set(Utc::now().into()),
            };
            record_insert(&mut report, name, tenant_id, model.insert(&*ctx.db).await);
        }

        self.backfill_checklists(ctx, tenant_id).await?;

        Ok(report)
    }

    /// Assigns a checklist to every employee without one, matched by job
    /// title. Only NULL columns are written.
    async fn backfill_checklists(&self, ctx: &SeedContext, tenant_id: Uuid) -> Result<()> {
        let checklists = onboarding_checklist::Entity::find()
            .filter(onboarding_checklist::Column::TenantId.eq(tenant_id))
            .all(&*ctx.db)
            .await?;
        if checklists.is_empty() {
            return Ok(());
        }

        let repo = EmployeeRepository::new(ctx.db.clone());
        for employee in repo.list_for_tenant(tenant_id).await? {
            let matched = match_template(&employee.job_title, &CHECKLIST_RULES);
            let Some(checklist) = pick_template(
                &checklists,
                matched,
                |row| row.name.as_str(),
                |row| row.is_default,
            ) else {
                continue;
            };
            repo.assign_checklist_if_unset(&employee, checklist.id).await?;
        }
        Ok(())
    }
}
