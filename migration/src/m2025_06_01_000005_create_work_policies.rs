//! Migration to create shifts and attendance policies.
//!
//! Both carry an `is_default` flag; the default row of each is what later
//! back-fill passes assign to employees that have none.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shifts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Shifts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Shifts::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Shifts::Name).text().not_null())
                    .col(ColumnDef::new(Shifts::StartsAt).time().not_null())
                    .col(ColumnDef::new(Shifts::EndsAt).time().not_null())
                    .col(
                        ColumnDef::new(Shifts::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Shifts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shifts_tenant_id")
                            .from(Shifts::Table, Shifts::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shifts_tenant_name")
                    .table(Shifts::Table)
                    .col(Shifts::TenantId)
                    .col(Shifts::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AttendancePolicies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendancePolicies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendancePolicies::TenantId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendancePolicies::Name).text().not_null())
                    .col(
                        ColumnDef::new(AttendancePolicies::GraceMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendancePolicies::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AttendancePolicies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_policies_tenant_id")
                            .from(AttendancePolicies::Table, AttendancePolicies::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_policies_tenant_name")
                    .table(AttendancePolicies::Table)
                    .col(AttendancePolicies::TenantId)
                    .col(AttendancePolicies::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendancePolicies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Shifts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Shifts {
    Table,
    Id,
    TenantId,
    Name,
    StartsAt,
    EndsAt,
    IsDefault,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AttendancePolicies {
    Table,
    Id,
    TenantId,
    Name,
    GraceMinutes,
    IsDefault,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
