//! End-to-end seeding behavior: idempotence, profiles and tenant isolation.

use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Statement};
use seeder::config::Profile;
use seeder::models::{branch, contract, department, employee, leave_application, tenant};
use seeder::repositories::tenant::CreateTenantRequest;
use seeder::repositories::TenantRepository;
use seeder::seeds::{self, SeedUnit};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{demo_config, demo_context, setup_test_db};

#[tokio::test]
async fn demo_run_populates_all_entity_groups() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    let summary = seeds::run(db.clone(), &config, Profile::Demo).await?;

    assert!(summary.failed_units.is_empty());
    assert_eq!(summary.totals.failed, 0);
    assert!(summary.totals.created > 0);
    // A clean first run reports every row as created, none as failed.
    for (unit, report) in &summary.units {
        assert_eq!(report.failed, 0, "unit '{}' reported failures", unit);
        assert_eq!(report.skipped, 0, "unit '{}' reported skips", unit);
    }

    let tenants = tenant::Entity::find().all(&*db).await?;
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].name, "Demo Company");
    assert!(tenants[0].is_demo);
    assert!(tenants[0].plan_name.is_none());

    let employees = employee::Entity::find().all(&*db).await?;
    assert_eq!(employees.len(), 6);
    let contracts = contract::Entity::find().all(&*db).await?;
    assert_eq!(contracts.len(), 6);
    let leaves = leave_application::Entity::find().all(&*db).await?;
    assert_eq!(leaves.len(), 6);

    Ok(())
}

#[tokio::test]
async fn second_run_creates_nothing() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(true);

    let first = seeds::run(db.clone(), &config, Profile::Demo).await?;
    let employees_after_first = employee::Entity::find().all(&*db).await?.len();

    let second = seeds::run(db.clone(), &config, Profile::Demo).await?;
    let employees_after_second = employee::Entity::find().all(&*db).await?.len();

    assert!(first.totals.created > 0);
    assert_eq!(second.totals.created, 0);
    assert!(second.failed_units.is_empty());
    assert_eq!(employees_after_first, employees_after_second);

    Ok(())
}

#[tokio::test]
async fn minimal_profile_creates_one_empty_company() -> Result<()> {
    let db = setup_test_db().await?;
    let mut config = demo_config(false);
    config.profile = "minimal".to_string();

    let summary = seeds::run(db.clone(), &config, Profile::Minimal).await?;
    assert_eq!(summary.units.len(), 1);

    let tenants = tenant::Entity::find().all(&*db).await?;
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].name, "My Company");
    assert!(!tenants[0].is_demo);

    let employees = employee::Entity::find().all(&*db).await?;
    assert!(employees.is_empty());

    Ok(())
}

#[tokio::test]
async fn saas_install_seeds_isolated_tenants() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(true);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    let tenants = tenant::Entity::find().all(&*db).await?;
    assert_eq!(tenants.len(), 2);
    assert!(tenants.iter().all(|t| t.plan_name.as_deref() == Some("professional")));
    assert!(tenants.iter().all(|t| t.plan_expires_at.is_some()));

    // Every child row references a parent of its own tenant.
    for t in &tenants {
        let branches = branch::Entity::find()
            .filter(branch::Column::TenantId.eq(t.id))
            .all(&*db)
            .await?;
        assert_eq!(branches.len(), 2);

        let departments = department::Entity::find()
            .filter(department::Column::TenantId.eq(t.id))
            .all(&*db)
            .await?;
        assert_eq!(departments.len(), 4);
        for dept in &departments {
            assert!(branches.iter().any(|b| b.id == dept.branch_id));
        }

        let employees = employee::Entity::find()
            .filter(employee::Column::TenantId.eq(t.id))
            .all(&*db)
            .await?;
        assert_eq!(employees.len(), 6);
        for emp in &employees {
            assert!(departments.iter().any(|d| d.id == emp.department_id));
        }
    }

    Ok(())
}

#[tokio::test]
async fn broken_unit_is_recorded_and_the_sequence_continues() -> Result<()> {
    let db = setup_test_db().await?;
    let config = demo_config(false);

    seeds::run(db.clone(), &config, Profile::Demo).await?;

    // Sabotage one unit's table so its queries error at unit scope.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "DROP TABLE contracts".to_string(),
    ))
    .await?;

    let summary = seeds::run(db.clone(), &config, Profile::Demo).await?;

    assert_eq!(summary.failed_units, ["contracts"]);
    let ran: Vec<&str> = summary.units.iter().map(|(name, _)| *name).collect();
    assert!(ran.contains(&"leave applications"));
    assert!(ran.contains(&"attendance regularizations"));

    Ok(())
}

#[tokio::test]
async fn missing_prerequisites_skip_instead_of_failing() -> Result<()> {
    let db = setup_test_db().await?;

    // A tenant with no catalogs or employees: the contract unit has nothing
    // to build on and must report a clean no-op.
    let repo = TenantRepository::new(db.clone());
    repo.create(CreateTenantRequest {
        name: "Empty Corp".to_string(),
        email: "owner@empty-corp.example".to_string(),
        is_demo: true,
        plan_name: None,
        plan_expires_at: None,
    })
    .await?;

    let ctx = demo_context(db.clone(), false).await?;
    let report = seeds::contracts::ContractSeeder.run(&ctx).await?;
    assert_eq!(report.created, 0);
    assert_eq!(report.failed, 0);

    let contracts = contract::Entity::find().all(&*db).await?;
    assert!(contracts.is_empty());

    Ok(())
}
