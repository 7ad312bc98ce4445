//! Database migrations for the HR platform seeder.
//!
//! Tables are created in seeding-stage order so that every foreign key
//! points at a table created by an earlier migration.

pub use sea_orm_migration::prelude::*;

mod m2025_06_01_000001_create_tenants;
mod m2025_06_01_000002_create_org_structure;
mod m2025_06_01_000003_create_employees;
mod m2025_06_01_000004_create_reference_catalogs;
mod m2025_06_01_000005_create_work_policies;
mod m2025_06_01_000006_create_onboarding_checklists;
mod m2025_06_01_000007_create_contracts;
mod m2025_06_01_000008_create_leave_applications;
mod m2025_06_01_000009_create_recruitment;
mod m2025_06_01_000010_create_payroll;
mod m2025_06_01_000011_create_transitions;
mod m2025_06_01_000012_create_regularizations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_06_01_000001_create_tenants::Migration),
            Box::new(m2025_06_01_000002_create_org_structure::Migration),
            Box::new(m2025_06_01_000003_create_employees::Migration),
            Box::new(m2025_06_01_000004_create_reference_catalogs::Migration),
            Box::new(m2025_06_01_000005_create_work_policies::Migration),
            Box::new(m2025_06_01_000006_create_onboarding_checklists::Migration),
            Box::new(m2025_06_01_000007_create_contracts::Migration),
            Box::new(m2025_06_01_000008_create_leave_applications::Migration),
            Box::new(m2025_06_01_000009_create_recruitment::Migration),
            Box::new(m2025_06_01_000010_create_payroll::Migration),
            Box::new(m2025_06_01_000011_create_transitions::Migration),
            Box::new(m2025_06_01_000012_create_regularizations::Migration),
        ]
    }
}
