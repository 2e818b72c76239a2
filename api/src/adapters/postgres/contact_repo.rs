//! PostgreSQL adapter for ContactMessageRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{ContactMessage, ContactMessageId, ContactStatus, NewContactMessage};
use crate::domain::ports::ContactMessageRepository;
use crate::entity::contact_messages;
use crate::error::DomainError;

/// PostgreSQL implementation of ContactMessageRepository
pub struct PostgresContactMessageRepository {
    db: DatabaseConnection,
}

impl PostgresContactMessageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = contact_messages::ActiveModel {
            id: Set(id),
            name: Set(message.name.clone()),
            email: Set(message.email.clone()),
            subject: Set(message.subject.clone()),
            message: Set(message.message.clone()),
            status: Set(ContactStatus::New.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn list(
        &self,
        status: Option<ContactStatus>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<ContactMessage>, u64), DomainError> {
        let mut query = contact_messages::Entity::find()
            .order_by_desc(contact_messages::Column::CreatedAt);

        if let Some(status) = status {
            query = query.filter(contact_messages::Column::Status.eq(status.to_string()));
        }

        let paginator = query.paginate(&self.db, page_size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok((models.into_iter().map(|m| m.into()).collect(), total))
    }

    async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<Option<ContactMessage>, DomainError> {
        let Some(model) = contact_messages::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active: contact_messages::ActiveModel = model.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(Utc::now().fixed_offset());

        let result = active
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<contact_messages::Model> for ContactMessage {
    fn from(model: contact_messages::Model) -> Self {
        ContactMessage {
            id: ContactMessageId(model.id),
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            status: model.status.parse().unwrap_or(ContactStatus::New),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
