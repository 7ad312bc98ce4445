//! Migration to create the tenant-scoped reference catalogs.
//!
//! Asset types, leave types, contract types, job categories, meeting rooms
//! and salary components all share the same shape: a named, described row
//! owned by a tenant, unique on (tenant_id, name).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Builds the (tenant_id, name) unique index every catalog table carries.
fn tenant_name_unique<T: Iden + 'static>(table: T, name: &str) -> IndexCreateStatement {
    Index::create()
        .name(name)
        .table(table)
        .col(Alias::new("tenant_id"))
        .col(Alias::new("name"))
        .unique()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssetTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssetTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AssetTypes::TenantId).uuid().not_null())
                    .col(ColumnDef::new(AssetTypes::Name).text().not_null())
                    .col(ColumnDef::new(AssetTypes::Description).text().null())
                    .col(
                        ColumnDef::new(AssetTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_types_tenant_id")
                            .from(AssetTypes::Table, AssetTypes::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(tenant_name_unique(
                AssetTypes::Table,
                "idx_asset_types_tenant_name",
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LeaveTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaveTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeaveTypes::TenantId).uuid().not_null())
                    .col(ColumnDef::new(LeaveTypes::Name).text().not_null())
                    .col(
                        ColumnDef::new(LeaveTypes::DaysAllowed)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LeaveTypes::IsPaid)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(LeaveTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_types_tenant_id")
                            .from(LeaveTypes::Table, LeaveTypes::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(tenant_name_unique(
                LeaveTypes::Table,
                "idx_leave_types_tenant_name",
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ContractTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContractTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContractTypes::TenantId).uuid().not_null())
                    .col(ColumnDef::new(ContractTypes::Name).text().not_null())
                    .col(ColumnDef::new(ContractTypes::Description).text().null())
                    .col(
                        ColumnDef::new(ContractTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contract_types_tenant_id")
                            .from(ContractTypes::Table, ContractTypes::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(tenant_name_unique(
                ContractTypes::Table,
                "idx_contract_types_tenant_name",
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobCategories::TenantId).uuid().not_null())
                    .col(ColumnDef::new(JobCategories::Name).text().not_null())
                    .col(ColumnDef::new(JobCategories::Description).text().null())
                    .col(
                        ColumnDef::new(JobCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_categories_tenant_id")
                            .from(JobCategories::Table, JobCategories::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(tenant_name_unique(
                JobCategories::Table,
                "idx_job_categories_tenant_name",
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MeetingRooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MeetingRooms::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MeetingRooms::TenantId).uuid().not_null())
                    .col(ColumnDef::new(MeetingRooms::Name).text().not_null())
                    .col(ColumnDef::new(MeetingRooms::Capacity).integer().not_null())
                    .col(ColumnDef::new(MeetingRooms::Location).text().null())
                    .col(
                        ColumnDef::new(MeetingRooms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_rooms_tenant_id")
                            .from(MeetingRooms::Table, MeetingRooms::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(tenant_name_unique(
                MeetingRooms::Table,
                "idx_meeting_rooms_tenant_name",
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SalaryComponents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalaryComponents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalaryComponents::TenantId).uuid().not_null())
                    .col(ColumnDef::new(SalaryComponents::Name).text().not_null())
                    .col(ColumnDef::new(SalaryComponents::Kind).text().not_null())
                    .col(
                        ColumnDef::new(SalaryComponents::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SalaryComponents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_salary_components_tenant_id")
                            .from(SalaryComponents::Table, SalaryComponents::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(tenant_name_unique(
                SalaryComponents::Table,
                "idx_salary_components_tenant_name",
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Table::drop().table(SalaryComponents::Table).to_owned(),
            Table::drop().table(MeetingRooms::Table).to_owned(),
            Table::drop().table(JobCategories::Table).to_owned(),
            Table::drop().table(ContractTypes::Table).to_owned(),
            Table::drop().table(LeaveTypes::Table).to_owned(),
            Table::drop().table(AssetTypes::Table).to_owned(),
        ] {
            manager.drop_table(table).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AssetTypes {
    Table,
    Id,
    TenantId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LeaveTypes {
    Table,
    Id,
    TenantId,
    Name,
    DaysAllowed,
    IsPaid,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ContractTypes {
    Table,
    Id,
    TenantId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum JobCategories {
    Table,
    Id,
    TenantId,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum MeetingRooms {
    Table,
    Id,
    TenantId,
    Name,
    Capacity,
    Location,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SalaryComponents {
    Table,
    Id,
    TenantId,
    Name,
    Kind,
    AmountCents,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
