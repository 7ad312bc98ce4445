//! Migration to create attendance regularization requests.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRegularizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRegularizations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::TenantId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::WorkDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::Status)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::Reason)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::ApprovedBy)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRegularizations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_regularizations_tenant_id")
                            .from(
                                AttendanceRegularizations::Table,
                                AttendanceRegularizations::TenantId,
                            )
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_regularizations_employee_id")
                            .from(
                                AttendanceRegularizations::Table,
                                AttendanceRegularizations::EmployeeId,
                            )
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_regularizations_employee_work_date")
                    .table(AttendanceRegularizations::Table)
                    .col(AttendanceRegularizations::EmployeeId)
                    .col(AttendanceRegularizations::WorkDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(AttendanceRegularizations::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum AttendanceRegularizations {
    Table,
    Id,
    TenantId,
    EmployeeId,
    WorkDate,
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
