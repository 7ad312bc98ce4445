//! Migration to create promotions and resignations.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promotions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Promotions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Promotions::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Promotions::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Promotions::DesignationId).uuid().not_null())
                    .col(ColumnDef::new(Promotions::PromotedOn).date().not_null())
                    .col(ColumnDef::new(Promotions::Status).text().not_null())
                    .col(ColumnDef::new(Promotions::ApprovedBy).uuid().null())
                    .col(
                        ColumnDef::new(Promotions::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Promotions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promotions_tenant_id")
                            .from(Promotions::Table, Promotions::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promotions_employee_id")
                            .from(Promotions::Table, Promotions::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promotions_designation_id")
                            .from(Promotions::Table, Promotions::DesignationId)
                            .to(Designations::Table, Designations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_promotions_employee_promoted_on")
                    .table(Promotions::Table)
                    .col(Promotions::EmployeeId)
                    .col(Promotions::PromotedOn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Resignations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resignations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resignations::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Resignations::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Resignations::NoticeDate).date().not_null())
                    .col(
                        ColumnDef::new(Resignations::LastWorkingDay)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Resignations::Status).text().not_null())
                    .col(ColumnDef::new(Resignations::Reason).text().not_null())
                    .col(
                        ColumnDef::new(Resignations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resignations_tenant_id")
                            .from(Resignations::Table, Resignations::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resignations_employee_id")
                            .from(Resignations::Table, Resignations::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resignations_employee")
                    .table(Resignations::Table)
                    .col(Resignations::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resignations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Promotions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Promotions {
    Table,
    Id,
    TenantId,
    EmployeeId,
    DesignationId,
    PromotedOn,
    Status,
    ApprovedBy,
    ApprovedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Resignations {
    Table,
    Id,
    TenantId,
    EmployeeId,
    NoticeDate,
    LastWorkingDay,
    Status,
    Reason,
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
enum Designations {
    Table,
    Id,
}
