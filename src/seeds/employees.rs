//! Employee seeding unit.
//!
//! Creates the demo staff roster for each tenant. Branch and department
//! foreign keys are derived from the employee's designation so the whole
//! chain stays within one tenant. Shift, attendance policy and onboarding
//! checklist columns are left NULL for the later back-fill passes.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::error::SeedError;
use crate::models::{department, designation, employee};
use crate::repositories::EmployeeRepository;

use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

struct EmployeeFixture {
    name: &'static str,
    email: &'static str,
    job_title: &'static str,
    designation: &'static str,
    joined_on: (i32, u32, u32),
}

const EMPLOYEES: [EmployeeFixture; 6] = [
    EmployeeFixture {
        name: "Ava Thompson",
        email: "ava.thompson@example.com",
        job_title: "Software Engineer",
        designation: "Software Engineer",
        joined_on: (2024, 3, 11),
    },
    EmployeeFixture {
        name: "Noah Patel",
        email: "noah.patel@example.com",
        job_title: "Senior Software Engineer",
        designation: "Senior Software Engineer",
        joined_on: (2023, 7, 3),
    },
    EmployeeFixture {
        name: "Mia Chen",
        email: "mia.chen@example.com",
        job_title: "Sales Executive",
        designation: "Sales Executive",
        joined_on: (2024, 1, 15),
    },
    EmployeeFixture {
        name: "Liam Garcia",
        email: "liam.garcia@example.com",
        job_title: "HR Manager",
        designation: "HR Manager",
        joined_on: (2022, 11, 21),
    },
    EmployeeFixture {
        name: "Emma Okafor",
        email: "emma.okafor@example.com",
        job_title: "Accountant",
        designation: "Accountant",
        joined_on: (2023, 4, 10),
    },
    EmployeeFixture {
        name: "Oliver Novak",
        email: "oliver.novak@example.com",
        job_title: "HR Generalist",
        designation: "HR Generalist",
        joined_on: (2024, 9, 2),
    },
];

pub struct EmployeeSeeder;

#[async_trait]
impl SeedUnit for EmployeeSeeder {
    fn name(&self) -> &'static str {
        "employees"
    }

    async fn run(&self, ctx: &SeedContext) -> Result<UnitReport> {
        let mut report = UnitReport::default();
        let Some(tenants) = guard_tenants(self.name(), ctx) else {
            return Ok(report);
        };

        let repo = EmployeeRepository::new(ctx.db.clone());

        for tenant in tenants {
            report.absorb(self.seed_tenant(ctx, &repo, tenant.id).await?);
        }

        log_summary(self.name(), &report);
        Ok(report)
    }
}

impl EmployeeSeeder {
    async fn seed_tenant(
        &self,
        ctx: &SeedContext,
        repo: &EmployeeRepository,
        tenant_id: Uuid,
    ) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let designations = designation::Entity::find()
            .filter(designation::Column::TenantId.eq(tenant_id))
            .all(&*ctx.db)
            .await?;
        if designations.is_empty() {
            log::warn!(
                "employees: {}",
                SeedError::MissingPrerequisite {
                    tenant_id,
                    what: "designations",
                }
            );
            return Ok(report);
        }

        let departments = department::Entity::find()
            .filter(department::Column::TenantId.eq(tenant_id))
            .all(&*ctx.db)
            .await?;

        for fixture in &EMPLOYEES {
            if repo.find_by_email(tenant_id, fixture.email).await?.is_some() {
                report.skipped += 1;
                continue;
            }

            let Some(designation) = designations.iter().find(|d| d.name == fixture.designation)
            else {
                log::warn!(
                    "employees: designation '{}' missing for tenant {}, skipping '{}'",
                    fixture.designation,
                    tenant_id,
                    fixture.name
                );
                report.failed += 1;
                continue;
            };
            let Some(department) = departments.iter().find(|d| d.id == designation.department_id)
            else {
                log::warn!(
                    "employees: department missing for designation '{}' of tenant {}, skipping '{}'",
                    fixture.designation,
                    tenant_id,
                    fixture.name
                );
                report.failed += 1;
                continue;
            };

            let (year, month, day) = fixture.joined_on;
            let joined_on = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| anyhow::anyhow!("invalid joining date in fixture"))?;

            let model = employee::ActiveModel {
                id: Set(Uuid::new_v4()),
                tenant_id: Set(tenant_id),
                branch_id: Set(department.branch_id),
                department_id: Set(department.id),
                designation_id: Set(designation.id),
                name: Set(fixture.name.to_string()),
                email: Set(fixture.email.to_string()),
                job_title: Set(fixture.job_title.to_string()),
                joined_on: Set(joined_on),
                shift_id: Set(None),
                attendance_policy_id: Set(None),
                onboarding_checklist_id: Set(None),
                created_at: Set(Utc::now().into()),
            };
            record_insert(
                &mut report,
                fixture.name,
                tenant_id,
                model.insert(&*ctx.db).await,
            );
        }

        Ok(report)
    }
}
