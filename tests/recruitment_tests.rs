//! Recruitment pipeline seeding: openings, keyword-matched interview
//! rounds, offer patterns and checklist back-fill.

use anyhow::Result;
use chrono::Duration;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use seeder::config::Profile;
use seeder::models::{employee, interview_round, job_opening, offer, onboarding_checklist, tenant};
use seeder::seeds;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{demo_config, setup_test_db};

#[tokio::test]
async fn engineering_opening_gets_the_technical_pipeline() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    let opening = job_opening::Entity::find()
        .filter(job_opening::Column::Title.eq("Senior Software Engineer"))
        .one(&*db)
        .await?
        .expect("engineering opening seeded");

    let rounds = interview_round::Entity::find()
        .filter(interview_round::Column::JobOpeningId.eq(opening.id))
        .order_by_asc(interview_round::Column::Sequence)
        .all(&*db)
        .await?;

    let names: Vec<&str> = rounds.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Technical Screen", "System Design", "Culture Fit"]);
    assert_eq!(rounds[0].sequence, 1);

    // The admin opening matches no keyword and falls back to the generic
    // two-round pipeline.
    let admin = job_opening::Entity::find()
        .filter(job_opening::Column::Title.eq("Office Administrator"))
        .one(&*db)
        .await?
        .expect("admin opening seeded");
    let admin_rounds = interview_round::Entity::find()
        .filter(interview_round::Column::JobOpeningId.eq(admin.id))
        .order_by_asc(interview_round::Column::Sequence)
        .all(&*db)
        .await?;
    let admin_names: Vec<&str> = admin_rounds.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(admin_names, ["Phone Screen", "Hiring Manager Interview"]);

    Ok(())
}

#[tokio::test]
async fn declined_offer_carries_reason_and_response_fields() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    let company = tenant::Entity::find()
        .one(&*db)
        .await?
        .expect("tenant seeded");

    let declined = offer::Entity::find()
        .filter(offer::Column::Status.eq("declined"))
        .one(&*db)
        .await?
        .expect("one declined offer in the pattern cycle");

    assert_eq!(
        declined.decline_reason.as_deref(),
        Some("Accepted a competing offer with higher compensation")
    );
    assert_eq!(
        declined.response_date,
        Some(declined.offer_date - Duration::days(declined.response_days as i64))
    );
    assert_eq!(declined.approved_by, Some(company.id));
    assert!(declined.approved_at.is_some());

    // Unresponded statuses carry none of the response fields.
    let draft = offer::Entity::find()
        .filter(offer::Column::Status.eq("draft"))
        .one(&*db)
        .await?
        .expect("one draft offer in the pattern cycle");
    assert!(draft.response_date.is_none());
    assert!(draft.decline_reason.is_none());
    assert!(draft.approved_by.is_none());

    Ok(())
}

#[tokio::test]
async fn checklists_match_job_titles_with_default_fallback() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    let checklists = onboarding_checklist::Entity::find().all(&*db).await?;
    assert_eq!(checklists.len(), 4);
    let by_name = |name: &str| {
        checklists
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
            .expect("checklist seeded")
    };

    let engineer = employee::Entity::find()
        .filter(employee::Column::Email.eq("ava.thompson@example.com"))
        .one(&*db)
        .await?
        .expect("engineer seeded");
    assert_eq!(
        engineer.onboarding_checklist_id,
        Some(by_name("Engineering Onboarding"))
    );

    // Accountant matches no keyword rule and lands on the default.
    let accountant = employee::Entity::find()
        .filter(employee::Column::Email.eq("emma.okafor@example.com"))
        .one(&*db)
        .await?
        .expect("accountant seeded");
    assert_eq!(
        accountant.onboarding_checklist_id,
        Some(by_name("General Onboarding"))
    );

    Ok(())
}
