//! Tenant repository for database operations.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::tenant::{self, Entity as Tenant};

/// Request data for creating a new tenant.
#[derive(Debug, Clone)]
pub struct CreateTenantRequest {
    pub name: String,
    pub email: String,
    pub is_demo: bool,
    /// Plan fields, set only on SaaS installs.
    pub plan_name: Option<String>,
    pub plan_expires_at: Option<chrono::DateTime<Utc>>,
}

/// Repository for tenant database operations.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pub db: Arc<DatabaseConnection>,
}

impl TenantRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Finds a tenant by its unique company name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<tenant::Model>> {
        let found = Tenant::find()
            .filter(tenant::Column::Name.eq(name))
            .one(&*self.db)
            .await?;
        Ok(found)
    }

    /// Lists all tenants in creation order.
    pub async fn list_all(&self) -> Result<Vec<tenant::Model>> {
        let tenants = Tenant::find()
            .order_by_asc(tenant::Column::CreatedAt)
            .all(&*self.db)
            .await?;
        Ok(tenants)
    }

    /// Creates a new tenant with a fresh id.
    pub async fn create(&self, request: CreateTenantRequest) -> Result<tenant::Model> {
        let model = tenant::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            email: Set(request.email),
            is_demo: Set(request.is_demo),
            plan_name: Set(request.plan_name),
            plan_expires_at: Set(request.plan_expires_at.map(Into::into)),
            created_at: Set(Utc::now().into()),
        };

        let created = model.insert(&*self.db).await?;
        Ok(created)
    }
}
