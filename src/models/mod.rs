//! # Data Models
//!
//! SeaORM entity models for every table the fixture loader populates.
//! All tables except `tenants` carry a `tenant_id` column; cross-entity
//! lookups inside a seed unit always filter on it.

pub mod asset_type;
pub mod attendance_policy;
pub mod attendance_regularization;
pub mod branch;
pub mod contract;
pub mod contract_type;
pub mod department;
pub mod designation;
pub mod employee;
pub mod interview_round;
pub mod job_category;
pub mod job_opening;
pub mod leave_application;
pub mod leave_type;
pub mod meeting_room;
pub mod offer;
pub mod onboarding_checklist;
pub mod payroll_run;
pub mod promotion;
pub mod resignation;
pub mod salary_component;
pub mod shift;
pub mod tenant;
pub mod time_entry;

pub use branch::Entity as Branch;
pub use department::Entity as Department;
pub use designation::Entity as Designation;
pub use employee::Entity as Employee;
pub use tenant::Entity as Tenant;
