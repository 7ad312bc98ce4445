//! Migration to create payroll runs and time entries.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PayrollRuns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PayrollRuns::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PayrollRuns::TenantId).uuid().not_null())
                    .col(ColumnDef::new(PayrollRuns::PeriodYear).integer().not_null())
                    .col(
                        ColumnDef::new(PayrollRuns::PeriodMonth)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PayrollRuns::Status).text().not_null())
                    .col(
                        ColumnDef::new(PayrollRuns::ProcessedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PayrollRuns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payroll_runs_tenant_id")
                            .from(PayrollRuns::Table, PayrollRuns::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payroll_runs_tenant_period")
                    .table(PayrollRuns::Table)
                    .col(PayrollRuns::TenantId)
                    .col(PayrollRuns::PeriodYear)
                    .col(PayrollRuns::PeriodMonth)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TimeEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimeEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TimeEntries::TenantId).uuid().not_null())
                    .col(ColumnDef::new(TimeEntries::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(TimeEntries::WorkDate).date().not_null())
                    .col(ColumnDef::new(TimeEntries::CheckIn).time().not_null())
                    .col(ColumnDef::new(TimeEntries::CheckOut).time().not_null())
                    .col(
                        ColumnDef::new(TimeEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_entries_tenant_id")
                            .from(TimeEntries::Table, TimeEntries::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_time_entries_employee_id")
                            .from(TimeEntries::Table, TimeEntries::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_time_entries_employee_work_date")
                    .table(TimeEntries::Table)
                    .col(TimeEntries::EmployeeId)
                    .col(TimeEntries::WorkDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimeEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PayrollRuns::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PayrollRuns {
    Table,
    Id,
    TenantId,
    PeriodYear,
    PeriodMonth,
    Status,
    ProcessedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TimeEntries {
    Table,
    Id,
    TenantId,
    EmployeeId,
    WorkDate,
    CheckIn,
    CheckOut,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
