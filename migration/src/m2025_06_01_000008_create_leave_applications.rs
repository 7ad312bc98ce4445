//! Migration to create leave applications.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaveApplications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaveApplications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeaveApplications::TenantId).uuid().not_null())
                    .col(
                        ColumnDef::new(LeaveApplications::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeaveApplications::LeaveTypeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LeaveApplications::FromDate).date().not_null())
                    .col(ColumnDef::new(LeaveApplications::ToDate).date().not_null())
                    .col(ColumnDef::new(LeaveApplications::Status).text().not_null())
                    .col(ColumnDef::new(LeaveApplications::Reason).text().not_null())
                    .col(ColumnDef::new(LeaveApplications::ApprovedBy).uuid().null())
                    .col(
                        ColumnDef::new(LeaveApplications::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LeaveApplications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_applications_tenant_id")
                            .from(LeaveApplications::Table, LeaveApplications::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_applications_employee_id")
                            .from(LeaveApplications::Table, LeaveApplications::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_applications_leave_type_id")
                            .from(LeaveApplications::Table, LeaveApplications::LeaveTypeId)
                            .to(LeaveTypes::Table, LeaveTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leave_applications_employee_from_date")
                    .table(LeaveApplications::Table)
                    .col(LeaveApplications::EmployeeId)
                    .col(LeaveApplications::FromDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaveApplications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeaveApplications {
    Table,
    Id,
    TenantId,
    EmployeeId,
    LeaveTypeId,
    FromDate,
    ToDate,
    Status,
    Reason,
    ApprovedBy,
    ApprovedAt,
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

#[derive(DeriveIden)]
enum LeaveTypes {
    Table,
    Id,
}
