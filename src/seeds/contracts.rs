//! Employment contracts, one per employee.
//!
//! The contract type rotates through the catalog by employee index;
//! non-permanent contracts get a one-year end date. The natural key is
//! (employee, start date), with the start date taken from the hire date.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::warn;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::error::SeedError;
use crate::models::{contract, contract_type};
use crate::repositories::EmployeeRepository;

use super::support::pattern_at;
use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

const CONTRACT_ROTATION: [&str; 4] = ["Permanent", "Fixed Term", "Probation", "Internship"];

const BASE_SALARY_CENTS: i64 = 6_000_000;
const SALARY_STEP_CENTS: i64 = 750_000;

pub struct ContractSeeder;

#[async_trait]
impl SeedUnit for ContractSeeder {
    fn name(&self) -> &'static str {
        "contracts"
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

impl ContractSeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant_id: Uuid) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let types = contract_type::Entity::find()
            .filter(contract_type::Column::TenantId.eq(tenant_id))
            .all(&*ctx.db)
            .await?;
        if types.is_empty() {
            warn!(
                "contracts: {}",
                SeedError::MissingPrerequisite {
                    tenant_id,
                    what: "contract types",
                }
            );
            return Ok(report);
        }

        let repo = EmployeeRepository::new(ctx.db.clone());
        for (idx, employee) in repo.list_for_tenant(tenant_id).await?.iter().enumerate() {
            let type_name = *pattern_at(&CONTRACT_ROTATION, idx);
            let Some(contract_type) = types.iter().find(|t| t.name == type_name) else {
                warn!(
                    "contracts: tenant {} is missing contract type {:?}, skipping {}",
                    tenant_id, type_name, employee.email
                );
                continue;
            };

            let exists = contract::Entity::find()
                .filter(contract::Column::EmployeeId.eq(employee.id))
                .filter(contract::Column::StartsOn.eq(employee.joined_on))
                .one(&*ctx.db)
                .await?
                .is_some();
            if exists {
                report.skipped += 1;
                continue;
            }

            let ends_on = (type_name != "Permanent").then(|| employee.joined_on + Duration::days(365));

            let model = contract::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                employee_id: Set(employee.id),
                contract_type_id: Set(contract_type.id),
                starts_on: Set(employee.joined_on),
                ends_on: Set(ends_on),
                status: Set("active".to_string()),
                annual_salary_cents: Set(BASE_SALARY_CENTS + idx as i64 * SALARY_STEP_CENTS),
                created_at: Set(Utc::now().into()),
            };
            record_insert(
                &mut report,
                &employee.email,
                tenant_id,
                model.insert(&*ctx.db).await,
            );
        }

        Ok(report)
    }
}
