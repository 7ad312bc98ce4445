//! Migration to create the employees table.
//!
//! The shift, attendance policy and onboarding checklist columns stay
//! nullable on purpose: later seed units back-fill them only when unset.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Employees::BranchId).uuid().not_null())
                    .col(ColumnDef::new(Employees::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(Employees::DesignationId).uuid().not_null())
                    .col(ColumnDef::new(Employees::Name).text().not_null())
                    .col(ColumnDef::new(Employees::Email).text().not_null())
                    .col(ColumnDef::new(Employees::JobTitle).text().not_null())
                    .col(ColumnDef::new(Employees::JoinedOn).date().not_null())
                    .col(ColumnDef::new(Employees::ShiftId).uuid().null())
                    .col(ColumnDef::new(Employees::AttendancePolicyId).uuid().null())
                    .col(
                        ColumnDef::new(Employees::OnboardingChecklistId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_tenant_id")
                            .from(Employees::Table, Employees::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_branch_id")
                            .from(Employees::Table, Employees::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_department_id")
                            .from(Employees::Table, Employees::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_designation_id")
                            .from(Employees::Table, Employees::DesignationId)
                            .to(Designations::Table, Designations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_tenant_email")
                    .table(Employees::Table)
                    .col(Employees::TenantId)
                    .col(Employees::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_tenant_id")
                    .table(Employees::Table)
                    .col(Employees::TenantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    TenantId,
    BranchId,
    DepartmentId,
    DesignationId,
    Name,
    Email,
    JobTitle,
    JoinedOn,
    ShiftId,
    AttendancePolicyId,
    OnboardingChecklistId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Branches {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Designations {
    Table,
    Id,
}
