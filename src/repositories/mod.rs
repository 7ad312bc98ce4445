//! # Repository Layer
//!
//! Repositories for the entities with cross-unit traffic. Tenants are read
//! by every seed unit; employees are both read and back-filled. The rest of
//! the tables are addressed through the entity API inside their seed units.

pub mod employee;
pub mod tenant;

pub use employee::EmployeeRepository;
pub use tenant::TenantRepository;
