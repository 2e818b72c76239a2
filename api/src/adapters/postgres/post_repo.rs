//! PostgreSQL adapter for PostRepository
//!
//! Carries the keyset boundary filter for the feed. The composite
//! comparison is expressed as a plain OR condition so it stays inside the
//! ORM; no server-side function is required.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{FeedCursor, NewPost, Post, PostId};
use crate::domain::ports::PostRepository;
use crate::entity::posts;
use crate::error::DomainError;

/// PostgreSQL implementation of PostRepository
pub struct PostgresPostRepository {
    db: DatabaseConnection,
}

impl PostgresPostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError> {
        let results = posts::Entity::find()
            .filter(posts::Column::Published.eq(true))
            .order_by_desc(posts::Column::CreatedAt)
            .order_by_desc(posts::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Unavailable(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_published_before(
        &self,
        cursor: &FeedCursor,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        let boundary = cursor.ts.fixed_offset();

        // created_at < ts OR (created_at = ts AND id < cursor.id)
        let below_cursor = Condition::any()
            .add(posts::Column::CreatedAt.lt(boundary))
            .add(
                Condition::all()
                    .add(posts::Column::CreatedAt.eq(boundary))
                    .add(posts::Column::Id.lt(cursor.id)),
            );

        let results = posts::Entity::find()
            .filter(posts::Column::Published.eq(true))
            .filter(below_cursor)
            .order_by_desc(posts::Column::CreatedAt)
            .order_by_desc(posts::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Unavailable(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn list_published_before_ts(
        &self,
        ts: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        let results = posts::Entity::find()
            .filter(posts::Column::Published.eq(true))
            .filter(posts::Column::CreatedAt.lt(ts.fixed_offset()))
            .order_by_desc(posts::Column::CreatedAt)
            .order_by_desc(posts::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Unavailable(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn supports_keyset_filter(&self) -> bool {
        // Probe with a boundary that matches nothing; we only care whether
        // the store accepts the composite comparison.
        let probe = FeedCursor {
            ts: Utc::now(),
            id: Uuid::nil(),
        };
        match self.list_published_before(&probe, 1).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "keyset filter probe failed, feed will fall back to timestamp-only paging");
                false
            }
        }
    }

    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = posts::ActiveModel {
            id: Set(id),
            title: Set(post.title.clone()),
            body: Set(post.body.clone()),
            published: Set(post.published),
            created_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Post {
            id: PostId(model.id),
            title: model.title,
            body: model.body,
            published: model.published,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
