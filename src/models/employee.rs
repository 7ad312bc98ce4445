//! Employee entity model
//!
//! Tenant-scoped person record. The `shift_id`, `attendance_policy_id` and
//! `onboarding_checklist_id` columns start out NULL and are back-filled by
//! later seed units, never overwritten once set.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub tenant_id: Uuid,
    pub branch_id: Uuid,
    pub department_id: Uuid,
    pub designation_id: Uuid,

    pub name: String,

    /// Account email, unique per tenant; stands in for the user account.
    pub email: String,

    pub job_title: String,
    pub joined_on: Date,

    pub shift_id: Option<Uuid>,
    pub attendance_policy_id: Option<Uuid>,
    pub onboarding_checklist_id: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
