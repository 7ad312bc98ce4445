//! Work policy seeding and the employee back-fill pass.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use seeder::config::Profile;
use seeder::models::{attendance_policy, attendance_regularization, employee, shift};
use seeder::seeds;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{demo_config, setup_test_db};

#[tokio::test]
async fn seeds_three_policies_and_assigns_defaults() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    let policies = attendance_policy::Entity::find().all(&*db).await?;
    assert_eq!(policies.len(), 3);
    let standard = policies
        .iter()
        .find(|p| p.name == "Standard Attendance Policy")
        .expect("standard policy seeded");
    assert_eq!(standard.grace_minutes, 15);
    assert!(standard.is_default);
    assert!(policies.iter().any(|p| p.name == "Flexible Attendance Policy" && p.grace_minutes == 30));
    assert!(policies.iter().any(|p| p.name == "Strict Attendance Policy" && p.grace_minutes == 5));

    let morning = shift::Entity::find()
        .filter(shift::Column::IsDefault.eq(true))
        .one(&*db)
        .await?
        .expect("default shift seeded");
    assert_eq!(morning.name, "Morning Shift");

    // Every employee gets the defaults on first run.
    let employees = employee::Entity::find().all(&*db).await?;
    assert!(!employees.is_empty());
    for emp in &employees {
        assert_eq!(emp.attendance_policy_id, Some(standard.id));
        assert_eq!(emp.shift_id, Some(morning.id));
    }

    Ok(())
}

#[tokio::test]
async fn backfill_never_overwrites_existing_assignment() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    let flexible = attendance_policy::Entity::find()
        .filter(attendance_policy::Column::Name.eq("Flexible Attendance Policy"))
        .one(&*db)
        .await?
        .expect("flexible policy seeded");

    // Simulate an admin moving someone off the default.
    let moved = employee::Entity::find()
        .order_by_asc(employee::Column::Email)
        .one(&*db)
        .await?
        .expect("employees seeded");
    let mut active = moved.clone().into_active_model();
    active.attendance_policy_id = Set(Some(flexible.id));
    active.update(&*db).await?;

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    let after = employee::Entity::find_by_id(moved.id)
        .one(&*db)
        .await?
        .expect("employee still present");
    assert_eq!(after.attendance_policy_id, Some(flexible.id));

    Ok(())
}

#[tokio::test]
async fn first_regularization_follows_the_pattern_list() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    // Employees are indexed in email order; the first one takes pattern 0.
    let first = employee::Entity::find()
        .order_by_asc(employee::Column::Email)
        .one(&*db)
        .await?
        .expect("employees seeded");

    let request = attendance_regularization::Entity::find()
        .filter(attendance_regularization::Column::EmployeeId.eq(first.id))
        .one(&*db)
        .await?
        .expect("regularization seeded for first employee");

    assert_eq!(request.status, "pending");
    assert_eq!(request.reason, "Traffic jam caused delay in reaching office");
    assert!(request.approved_by.is_none());
    assert!(request.approved_at.is_none());

    Ok(())
}
