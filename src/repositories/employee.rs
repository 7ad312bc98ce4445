//! Employee repository for database operations.
//!
//! Owns the monotonic back-fill updates: a nullable assignment column is
//! only ever written when it is currently NULL, so re-running the loader
//! never overwrites an existing assignment.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::employee::{self, Entity as Employee};

/// Repository for employee database operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pub db: Arc<DatabaseConnection>,
}

impl EmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists a tenant's employees in a stable order (by email).
    ///
    /// The stable ordering matters: index-modulo pattern assignment in the
    /// transactional seed units depends on it.
    pub async fn list_for_tenant(&self, tenant_id: Uuid) -> Result<Vec<employee::Model>> {
        let employees = Employee::find()
            .filter(employee::Column::TenantId.eq(tenant_id))
            .order_by_asc(employee::Column::Email)
            .all(&*self.db)
            .await?;
        Ok(employees)
    }

    /// Finds an employee by tenant and email (the natural key).
    pub async fn find_by_email(
        &self,
        tenant_id: Uuid,
        email: &str,
    ) -> Result<Option<employee::Model>> {
        let found = Employee::find()
            .filter(employee::Column::TenantId.eq(tenant_id))
            .filter(employee::Column::Email.eq(email))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Back-fills the shift assignment iff the employee has none.
    ///
    /// Returns true when a write happened.
    pub async fn assign_shift_if_unset(
        &self,
        employee: &employee::Model,
        shift_id: Uuid,
    ) -> Result<bool> {
        if employee.shift_id.is_some() {
            return Ok(false);
        }
        let mut active = employee.clone().into_active_model();
        active.shift_id = Set(Some(shift_id));
        active.update(&*self.db).await?;
        Ok(true)
    }

    /// Back-fills the attendance policy assignment iff the employee has none.
    pub async fn assign_attendance_policy_if_unset(
        &self,
        employee: &employee::Model,
        policy_id: Uuid,
    ) -> Result<bool> {
        if employee.attendance_policy_id.is_some() {
            return Ok(false);
        }
        let mut active = employee.clone().into_active_model();
        active.attendance_policy_id = Set(Some(policy_id));
        active.update(&*self.db).await?;
        Ok(true)
    }

    /// Back-fills the onboarding checklist assignment iff the employee has
    /// none.
    pub async fn assign_checklist_if_unset(
        &self,
        employee: &employee::Model,
        checklist_id: Uuid,
    ) -> Result<bool> {
        if employee.onboarding_checklist_id.is_some() {
            return Ok(false);
        }
        let mut active = employee.clone().into_active_model();
        active.onboarding_checklist_id = Set(Some(checklist_id));
        active.update(&*self.db).await?;
        Ok(true)
    }
}
