//! Migration to create onboarding checklists.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnboardingChecklists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnboardingChecklists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OnboardingChecklists::TenantId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OnboardingChecklists::Name).text().not_null())
                    .col(
                        ColumnDef::new(OnboardingChecklists::Items)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OnboardingChecklists::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(OnboardingChecklists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_onboarding_checklists_tenant_id")
                            .from(OnboardingChecklists::Table, OnboardingChecklists::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_onboarding_checklists_tenant_name")
                    .table(OnboardingChecklists::Table)
                    .col(OnboardingChecklists::TenantId)
                    .col(OnboardingChecklists::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OnboardingChecklists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OnboardingChecklists {
    Table,
    Id,
    TenantId,
    Name,
    Items,
    IsDefault,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
