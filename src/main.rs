//! Fixture loader command-line entry point.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use seeder::config::{ConfigLoader, Profile};
use seeder::db::init_pool;
use seeder::logging::init_subscriber;
use seeder::repositories::TenantRepository;
use seeder::seeds;

#[derive(Parser)]
#[command(name = "seeder", about = "HR platform database fixture loader")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending schema migrations.
    Migrate,
    /// Run the fixture loader (migrates first).
    Seed {
        /// Override the configured seed profile (demo or minimal).
        #[arg(long)]
        profile: Option<Profile>,
    },
    /// Check connectivity and report tenant counts.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ConfigLoader::new().load()?;
    init_subscriber(&config);
    info!("configuration: {}", config.redacted_json()?);

    let db = Arc::new(init_pool(&config).await?);

    match cli.command {
        Command::Migrate => {
            Migrator::up(&*db, None).await?;
            info!("migrations applied");
        }
        Command::Seed { profile } => {
            Migrator::up(&*db, None).await?;
            let profile = match profile {
                Some(profile) => profile,
                None => config.seed_profile()?,
            };
            let summary = seeds::run(db, &config, profile).await?;
            for (unit, report) in &summary.units {
                info!(
                    "{}: {} created, {} skipped, {} failed",
                    unit, report.created, report.skipped, report.failed
                );
            }
            for unit in &summary.failed_units {
                log::warn!("unit '{}' did not complete", unit);
            }
        }
        Command::Status => {
            seeder::db::health_check(&db).await?;
            let pending = Migrator::get_pending_migrations(&*db).await?;
            println!("database: reachable");
            println!("pending migrations: {}", pending.len());

            let tenants = TenantRepository::new(db.clone()).list_all().await?;
            println!("tenants: {}", tenants.len());
            for tenant in &tenants {
                println!("  {} ({}, demo={})", tenant.name, tenant.id, tenant.is_demo);
            }

            println!("row counts:");
            for (table, count) in table_counts(&db).await? {
                println!("  {:<28} {}", table, count);
            }
        }
    }

    Ok(())
}

async fn table_counts(db: &DatabaseConnection) -> Result<Vec<(&'static str, u64)>, sea_orm::DbErr> {
    use seeder::models::*;

    Ok(vec![
        ("branches", branch::Entity::find().count(db).await?),
        ("departments", department::Entity::find().count(db).await?),
        ("designations", designation::Entity::find().count(db).await?),
        ("employees", employee::Entity::find().count(db).await?),
        ("asset_types", asset_type::Entity::find().count(db).await?),
        ("leave_types", leave_type::Entity::find().count(db).await?),
        (
            "contract_types",
            contract_type::Entity::find().count(db).await?,
        ),
        (
            "job_categories",
            job_category::Entity::find().count(db).await?,
        ),
        (
            "meeting_rooms",
            meeting_room::Entity::find().count(db).await?,
        ),
        (
            "salary_components",
            salary_component::Entity::find().count(db).await?,
        ),
        ("shifts", shift::Entity::find().count(db).await?),
        (
            "attendance_policies",
            attendance_policy::Entity::find().count(db).await?,
        ),
        (
            "onboarding_checklists",
            onboarding_checklist::Entity::find().count(db).await?,
        ),
        ("contracts", contract::Entity::find().count(db).await?),
        (
            "leave_applications",
            leave_application::Entity::find().count(db).await?,
        ),
        ("job_openings", job_opening::Entity::find().count(db).await?),
        (
            "interview_rounds",
            interview_round::Entity::find().count(db).await?,
        ),
        ("offers", offer::Entity::find().count(db).await?),
        ("payroll_runs", payroll_run::Entity::find().count(db).await?),
        ("time_entries", time_entry::Entity::find().count(db).await?),
        ("promotions", promotion::Entity::find().count(db).await?),
        ("resignations", resignation::Entity::find().count(db).await?),
        (
            "attendance_regularizations",
            attendance_regularization::Entity::find().count(db).await?,
        ),
    ])
}
