//! Leave application entity model
//!
//! `approved_by`/`approved_at` are populated iff the status is in the
//! approved-like set {approved, rejected}.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leave_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub tenant_id: Uuid,
    pub employee_id: Uuid,
    pub leave_type_id: Uuid,

    pub from_date: Date,
    pub to_date: Date,

    pub status: String,
    pub reason: String,

    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
