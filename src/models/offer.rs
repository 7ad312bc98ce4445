//! Offer entity model
//!
//! Status machine: draft -> sent -> negotiating -> {accepted | declined |
//! expired}. Responded statuses carry approver fields and a response date;
//! declined offers additionally carry a decline reason.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub tenant_id: Uuid,
    pub job_opening_id: Uuid,

    pub candidate_name: String,
    pub candidate_email: String,

    pub status: String,

    pub offer_date: Date,

    /// Days the candidate has to respond.
    pub response_days: i32,

    pub response_date: Option<Date>,
    pub decline_reason: Option<String>,

    pub annual_salary_cents: i64,

    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
