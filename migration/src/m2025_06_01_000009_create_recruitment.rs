//! Migration to create the recruitment tables.
//!
//! Job openings, their interview rounds and the offers extended to
//! candidates. Offers are unique per (job_opening, candidate_email).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobOpenings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobOpenings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobOpenings::TenantId).uuid().not_null())
                    .col(ColumnDef::new(JobOpenings::JobCategoryId).uuid().not_null())
                    .col(ColumnDef::new(JobOpenings::Title).text().not_null())
                    .col(
                        ColumnDef::new(JobOpenings::Status)
                            .text()
                            .not_null()
                            .default("open"),
                    )
                    .col(
                        ColumnDef::new(JobOpenings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_openings_tenant_id")
                            .from(JobOpenings::Table, JobOpenings::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_openings_job_category_id")
                            .from(JobOpenings::Table, JobOpenings::JobCategoryId)
                            .to(JobCategories::Table, JobCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_openings_tenant_title")
                    .table(JobOpenings::Table)
                    .col(JobOpenings::TenantId)
                    .col(JobOpenings::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InterviewRounds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InterviewRounds::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InterviewRounds::TenantId).uuid().not_null())
                    .col(
                        ColumnDef::new(InterviewRounds::JobOpeningId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InterviewRounds::Name).text().not_null())
                    .col(ColumnDef::new(InterviewRounds::Sequence).integer().not_null())
                    .col(
                        ColumnDef::new(InterviewRounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interview_rounds_tenant_id")
                            .from(InterviewRounds::Table, InterviewRounds::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interview_rounds_job_opening_id")
                            .from(InterviewRounds::Table, InterviewRounds::JobOpeningId)
                            .to(JobOpenings::Table, JobOpenings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interview_rounds_opening_sequence")
                    .table(InterviewRounds::Table)
                    .col(InterviewRounds::JobOpeningId)
                    .col(InterviewRounds::Sequence)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Offers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Offers::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Offers::JobOpeningId).uuid().not_null())
                    .col(ColumnDef::new(Offers::CandidateName).text().not_null())
                    .col(ColumnDef::new(Offers::CandidateEmail).text().not_null())
                    .col(ColumnDef::new(Offers::Status).text().not_null())
                    .col(ColumnDef::new(Offers::OfferDate).date().not_null())
                    .col(ColumnDef::new(Offers::ResponseDays).integer().not_null())
                    .col(ColumnDef::new(Offers::ResponseDate).date().null())
                    .col(ColumnDef::new(Offers::DeclineReason).text().null())
                    .col(
                        ColumnDef::new(Offers::AnnualSalaryCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Offers::ApprovedBy).uuid().null())
                    .col(
                        ColumnDef::new(Offers::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offers_tenant_id")
                            .from(Offers::Table, Offers::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offers_job_opening_id")
                            .from(Offers::Table, Offers::JobOpeningId)
                            .to(JobOpenings::Table, JobOpenings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_offers_opening_candidate")
                    .table(Offers::Table)
                    .col(Offers::JobOpeningId)
                    .col(Offers::CandidateEmail)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InterviewRounds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobOpenings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobOpenings {
    Table,
    Id,
    TenantId,
    JobCategoryId,
    Title,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InterviewRounds {
    Table,
    Id,
    TenantId,
    JobOpeningId,
    Name,
    Sequence,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    TenantId,
    JobOpeningId,
    CandidateName,
    CandidateEmail,
    Status,
    OfferDate,
    ResponseDays,
    ResponseDate,
    DeclineReason,
    AnnualSalaryCents,
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
enum JobCategories {
    Table,
    Id,
}
