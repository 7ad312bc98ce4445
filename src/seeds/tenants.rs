//! Tenant bootstrap unit.
//!
//! The one unit both profiles run. Demo installs create demo company
//! accounts (several of them, with plan fields, on SaaS installs); minimal
//! installs create a single empty company account.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::config::Profile;
use crate::repositories::TenantRepository;
use crate::repositories::tenant::CreateTenantRequest;

use super::{SeedContext, SeedUnit, UnitReport, log_summary};

struct TenantFixture {
    name: &'static str,
    email: &'static str,
}

const DEMO_SAAS_TENANTS: [TenantFixture; 2] = [
    TenantFixture {
        name: "Acme Logistics",
        email: "owner@acme-logistics.example",
    },
    TenantFixture {
        name: "Globex Retail",
        email: "owner@globex-retail.example",
    },
];

const DEMO_SINGLE_TENANT: TenantFixture = TenantFixture {
    name: "Demo Company",
    email: "owner@demo-company.example",
};

const MINIMAL_TENANT: TenantFixture = TenantFixture {
    name: "My Company",
    email: "admin@my-company.example",
};

const DEMO_PLAN_NAME: &str = "professional";

pub struct TenantSeeder;

#[async_trait]
impl SeedUnit for TenantSeeder {
    fn name(&self) -> &'static str {
        "tenant bootstrap"
    }

    async fn run(&self, ctx: &SeedContext) -> Result<UnitReport> {
        let repo = TenantRepository::new(ctx.db.clone());
        let mut report = UnitReport::default();

        let is_demo = ctx.profile == Profile::Demo;
        let fixtures: &[TenantFixture] = match ctx.profile {
            Profile::Demo if ctx.config.saas_install => &DEMO_SAAS_TENANTS,
            Profile::Demo => std::slice::from_ref(&DEMO_SINGLE_TENANT),
            Profile::Minimal => std::slice::from_ref(&MINIMAL_TENANT),
        };

        for fixture in fixtures {
            match repo.find_by_name(fixture.name).await? {
                Some(_) => {
                    log::info!("tenant '{}' already exists, skipping", fixture.name);
                    report.skipped += 1;
                }
                None => {
                    let (plan_name, plan_expires_at) = if is_demo && ctx.config.saas_install {
                        (
                            Some(DEMO_PLAN_NAME.to_string()),
                            Some(Utc::now() + Duration::days(365)),
                        )
                    } else {
                        (None, None)
                    };

                    let request = CreateTenantRequest {
                        name: fixture.name.to_string(),
                        email: fixture.email.to_string(),
                        is_demo,
                        plan_name,
                        plan_expires_at,
                    };

                    match repo.create(request).await {
                        Ok(created) => {
                            log::info!("created tenant '{}' ({})", created.name, created.id);
                            report.created += 1;
                        }
                        Err(err) => {
                            log::error!("failed to create tenant '{}': {}", fixture.name, err);
                            report.failed += 1;
                        }
                    }
                }
            }
        }

        log_summary(self.name(), &report);
        Ok(report)
    }
}
