//! Attendance regularization entity model
//!
//! Requests to correct a missed or late punch. Statuses cycle through a
//! fixed pattern during seeding; approver fields follow the approved-like
//! set {approved, rejected}.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_regularizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub tenant_id: Uuid,
    pub employee_id: Uuid,

    pub work_date: Date,

    pub status: String,
    pub reason: String,

    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
