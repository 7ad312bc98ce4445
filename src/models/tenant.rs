//! Tenant entity model
//!
//! A tenant is a company account; every seeded row belongs to exactly one.
//! Plan fields are only set on multi-tenant SaaS installs.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Company name, unique across the install.
    pub name: String,

    /// Primary account email for the company.
    pub email: String,

    /// True for demo-install tenants.
    pub is_demo: bool,

    pub plan_name: Option<String>,
    pub plan_expires_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
