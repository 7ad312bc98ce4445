//! Migration to create employment contracts.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contracts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contracts::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Contracts::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Contracts::ContractTypeId).uuid().not_null())
                    .col(ColumnDef::new(Contracts::StartsOn).date().not_null())
                    .col(ColumnDef::new(Contracts::EndsOn).date().null())
                    .col(
                        ColumnDef::new(Contracts::Status)
                            .text()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Contracts::AnnualSalaryCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Contracts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_tenant_id")
                            .from(Contracts::Table, Contracts::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_employee_id")
                            .from(Contracts::Table, Contracts::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_contract_type_id")
                            .from(Contracts::Table, Contracts::ContractTypeId)
                            .to(ContractTypes::Table, ContractTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One contract per employee and start date.
        manager
            .create_index(
                Index::create()
                    .name("idx_contracts_employee_starts_on")
                    .table(Contracts::Table)
                    .col(Contracts::EmployeeId)
                    .col(Contracts::StartsOn)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    TenantId,
    EmployeeId,
    ContractTypeId,
    StartsOn,
    EndsOn,
    Status,
    AnnualSalaryCents,
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
enum ContractTypes {
    Table,
    Id,
}
