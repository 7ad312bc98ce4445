//! Recruitment pipeline: job openings, interview rounds and offers.
//!
//! Interview round templates are matched to the opening title by keyword,
//! falling back to a generic two-round pipeline. Offers pattern-cycle
//! through the status machine by a flat index over (opening, candidate)
//! pairs.
//!
//! Responded offers carry `response_date = offer_date - response_days`,
//! matching the long-standing loader behavior downstream reports expect.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use log::warn;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::error::SeedError;
use crate::models::{interview_round, job_category, job_opening, offer, tenant};

use super::support::{match_template, pattern_at};
use super::{SeedContext, SeedUnit, UnitReport, guard_tenants, log_summary, record_insert};

/// (title, job category)
const OPENINGS: [(&str, &str); 3] = [
    ("Senior Software Engineer", "Engineering"),
    ("Sales Executive", "Sales"),
    ("Office Administrator", "Operations"),
];

const ROUND_RULES: [(&str, &str); 2] = [("engineer", "engineering"), ("sales", "sales")];

const ENGINEERING_ROUNDS: [&str; 3] = ["Technical Screen", "System Design", "Culture Fit"];
const SALES_ROUNDS: [&str; 3] = ["Phone Screen", "Role Play", "Final Interview"];
const DEFAULT_ROUNDS: [&str; 2] = ["Phone Screen", "Hiring Manager Interview"];

/// (name, email)
const CANDIDATES: [(&str, &str); 2] = [
    ("Priya Sharma", "priya.sharma@mail.example"),
    ("Daniel Kim", "daniel.kim@mail.example"),
];

/// (status, response days, decline reason)
const OFFER_PATTERNS: [(&str, i32, Option<&str>); 6] = [
    ("sent", 7, None),
    ("accepted", 10, None),
    (
        "declined",
        7,
        Some("Accepted a competing offer with higher compensation"),
    ),
    ("negotiating", 14, None),
    ("expired", 7, None),
    ("draft", 7, None),
];

const BASE_OFFER_CENTS: i64 = 9_000_000;
const OFFER_STEP_CENTS: i64 = 500_000;

/// Statuses where the candidate has responded.
fn has_response(status: &str) -> bool {
    matches!(status, "accepted" | "declined" | "expired")
}

fn rounds_for(title: &str) -> &'static [&'static str] {
    match match_template(title, &ROUND_RULES) {
        Some("engineering") => &ENGINEERING_ROUNDS,
        Some("sales") => &SALES_ROUNDS,
        _ => &DEFAULT_ROUNDS,
    }
}

pub struct RecruitmentSeeder;

#[async_trait]
impl SeedUnit for RecruitmentSeeder {
    fn name(&self) -> &'static str {
        "recruitment"
    }

    async fn run(&self, ctx: &SeedContext) -> Result<UnitReport> {
        let mut report = UnitReport::default();
        let Some(tenants) = guard_tenants(self.name(), ctx) else {
            return Ok(report);
        };

        for tenant in tenants {
            report.absorb(self.seed_tenant(ctx, tenant).await?);
        }

        log_summary(self.name(), &report);
        Ok(report)
    }
}

impl RecruitmentSeeder {
    async fn seed_tenant(&self, ctx: &SeedContext, tenant: &tenant::Model) -> Result<UnitReport> {
        let mut report = UnitReport::default();

        let categories = job_category::Entity::find()
            .filter(job_category::Column::TenantId.eq(tenant.id))
            .all(&*ctx.db)
            .await?;
        if categories.is_empty() {
            warn!(
                "recruitment: {}",
                SeedError::MissingPrerequisite {
                    tenant_id: tenant.id,
                    what: "job categories",
                }
            );
            return Ok(report);
        }

        let Some(base_offer_date) = NaiveDate::from_ymd_opt(2025, 4, 1) else {
            return Ok(report);
        };

        for (opening_idx, (title, category_name)) in OPENINGS.iter().enumerate() {
            let Some(category) = categories.iter().find(|c| &c.name == category_name) else {
                warn!(
                    "recruitment: tenant {} is missing job category {:?}, skipping {:?}",
                    tenant.id, category_name, title
                );
                continue;
            };

            let opening = match job_opening::Entity::find()
                .filter(job_opening::Column::TenantId.eq(tenant.id))
                .filter(job_opening::Column::Title.eq(*title))
                .one(&*ctx.db)
                .await?
            {
                Some(existing) => {
                    report.skipped += 1;
                    existing
                }
                None => {
                    let model = job_opening::ActiveModel {
                        id: Set(Uuid::new_v4()),
                        tenant_id: Set(tenant.id),
                        job_category_id: Set(category.id),
                        title: Set(title.to_string()),
                        status: Set("open".to_string()),
                        created_at: Set(Utc::now().into()),
                    };
                    match model.insert(&*ctx.db).await {
                        Ok(inserted) => {
                            report.created += 1;
                            inserted
                        }
                        Err(err) => {
                            record_insert::<job_opening::Model>(
                                &mut report,
                                title,
                                tenant.id,
                                Err(err),
                            );
                            continue;
                        }
                    }
                }
            };

            for (round_idx, round_name) in rounds_for(title).iter().enumerate() {
                let sequence = round_idx as i32 + 1;
                let exists = interview_round::Entity::find()
                    .filter(interview_round::Column::JobOpeningId.eq(opening.id))
                    .filter(interview_round::Column::Sequence.eq(sequence))
                    .one(&*ctx.db)
                    .await?
                    .is_some();
                if exists {
                    report.skipped += 1;
                    continue;
                }
                let model = interview_round::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    tenant_id: Set(tenant.id),
                    job_opening_id: Set(opening.id),
                    name: Set(round_name.to_string()),
                    sequence: Set(sequence),
                    created_at: Set(Utc::now().into()),
                };
                record_insert(
                    &mut report,
                    round_name,
                    tenant.id,
                    model.insert(&*ctx.db).await,
                );
            }

            for (cand_idx, (cand_name, cand_email)) in CANDIDATES.iter().enumerate() {
                let k = opening_idx * CANDIDATES.len() + cand_idx;
                let (status, response_days, decline_reason) = *pattern_at(&OFFER_PATTERNS, k);

                let exists = offer::Entity::find()
                    .filter(offer::Column::JobOpeningId.eq(opening.id))
                    .filter(offer::Column::CandidateEmail.eq(*cand_email))
                    .one(&*ctx.db)
                    .await?
                    .is_some();
                if exists {
                    report.skipped += 1;
                    continue;
                }

                let offer_date = base_offer_date + Duration::days(k as i64 * 3);
                let responded = has_response(status);

                let model = offer::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    tenant_id: Set(tenant.id),
                    job_opening_id: Set(opening.id),
                    candidate_name: Set(cand_name.to_string()),
                    candidate_email: Set(cand_email.to_string()),
                    status: Set(status.to_string()),
                    offer_date: Set(offer_date),
                    response_days: Set(response_days),
                    response_date: Set(
                        responded.then(|| offer_date - Duration::days(response_days as i64))
                    ),
                    decline_reason: Set(
                        (status == "declined").then(|| decline_reason.unwrap_or_default().to_string())
                    ),
                    annual_salary_cents: Set(BASE_OFFER_CENTS + k as i64 * OFFER_STEP_CENTS),
                    approved_by: Set(responded.then_some(tenant.id)),
                    approved_at: Set(responded.then(|| Utc::now().into())),
                    created_at: Set(Utc::now().into()),
                };
                record_insert(
                    &mut report,
                    cand_email,
                    tenant.id,
                    model.insert(&*ctx.db).await,
                );
            }
        }

        Ok(report)
    }
}
