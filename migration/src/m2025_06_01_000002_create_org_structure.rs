//! Migration to create the organisational structure tables.
//!
//! Branches, departments and designations form the dependency chain that
//! employee records hang off. Each natural key is unique per tenant.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Branches::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Branches::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Branches::Name).text().not_null())
                    .col(ColumnDef::new(Branches::City).text().null())
                    .col(
                        ColumnDef::new(Branches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branches_tenant_id")
                            .from(Branches::Table, Branches::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_branches_tenant_name")
                    .table(Branches::Table)
                    .col(Branches::TenantId)
                    .col(Branches::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Departments::BranchId).uuid().not_null())
                    .col(ColumnDef::new(Departments::Name).text().not_null())
                    .col(
                        ColumnDef::new(Departments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_departments_tenant_id")
                            .from(Departments::Table, Departments::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_departments_branch_id")
                            .from(Departments::Table, Departments::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_departments_tenant_name")
                    .table(Departments::Table)
                    .col(Departments::TenantId)
                    .col(Departments::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Designations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Designations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Designations::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Designations::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(Designations::Name).text().not_null())
                    .col(
                        ColumnDef::new(Designations::Level)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Designations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designations_tenant_id")
                            .from(Designations::Table, Designations::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_designations_department_id")
                            .from(Designations::Table, Designations::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_designations_tenant_name")
                    .table(Designations::Table)
                    .col(Designations::TenantId)
                    .col(Designations::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Designations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Branches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Branches {
    Table,
    Id,
    TenantId,
    Name,
    City,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    Id,
    TenantId,
    BranchId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Designations {
    Table,
    Id,
    TenantId,
    DepartmentId,
    Name,
    Level,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
