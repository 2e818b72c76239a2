//! PostgreSQL adapter for AdminUserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{AdminRole, AdminUser, AdminUserId};
use crate::domain::ports::AdminUserRepository;
use crate::entity::admin_users;
use crate::error::DomainError;

/// PostgreSQL implementation of AdminUserRepository
pub struct PostgresAdminUserRepository {
    db: DatabaseConnection,
}

impl PostgresAdminUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminUserRepository for PostgresAdminUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError> {
        let result = admin_users::Entity::find()
            .filter(admin_users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<admin_users::Model> for AdminUser {
    fn from(model: admin_users::Model) -> Self {
        AdminUser {
            id: AdminUserId(model.id),
            email: model.email,
            password_hash: model.password_hash,
            role: model.role.parse().unwrap_or(AdminRole::Admin),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
