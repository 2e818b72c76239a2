//! PostgreSQL adapter for ArticleRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{
    AdminUserId, Article, ArticleFilter, ArticleId, ArticleStatus, ArticleUpdate, NewArticle,
};
use crate::domain::ports::ArticleRepository;
use crate::entity::articles;
use crate::error::DomainError;

/// PostgreSQL implementation of ArticleRepository
pub struct PostgresArticleRepository {
    db: DatabaseConnection,
}

impl PostgresArticleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn filtered_query(filter: &ArticleFilter) -> sea_orm::Select<articles::Entity> {
        let mut query = articles::Entity::find()
            .filter(articles::Column::Status.eq(filter.status.to_string()))
            .order_by_desc(articles::Column::PublishedAt)
            .order_by_desc(articles::Column::CreatedAt);

        if let Some(category) = &filter.category {
            query = query.filter(articles::Column::Category.eq(category));
        }

        if let Some(tag) = &filter.tag {
            // tags is a JSON array; containment check runs server-side
            query = query.filter(Expr::cust_with_values(
                "tags @> ?",
                [serde_json::json!([tag])],
            ));
        }

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(articles::Column::Title.contains(search))
                    .add(articles::Column::Excerpt.contains(search))
                    .add(articles::Column::Content.contains(search)),
            );
        }

        query
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<Article>, DomainError> {
        let mut query = articles::Entity::find().filter(articles::Column::Slug.eq(slug));

        if published_only {
            query = query
                .filter(articles::Column::Status.eq(ArticleStatus::Published.to_string()));
        }

        let result = query
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, DomainError> {
        let count = articles::Entity::find()
            .filter(articles::Column::Slug.eq(slug))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Article>, u64), DomainError> {
        let paginator = Self::filtered_query(filter).paginate(&self.db, page_size);

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

    async fn list_published_taxonomy(
        &self,
    ) -> Result<Vec<(Option<String>, Vec<String>)>, DomainError> {
        let models = articles::Entity::find()
            .filter(articles::Column::Status.eq(ArticleStatus::Published.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(models
            .into_iter()
            .map(|m| (m.category, tags_from_json(m.tags)))
            .collect())
    }

    async fn create(&self, article: &NewArticle) -> Result<Article, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = articles::ActiveModel {
            id: Set(id),
            title: Set(article.title.clone()),
            slug: Set(article.slug.clone()),
            excerpt: Set(article.excerpt.clone()),
            content: Set(article.content.clone()),
            featured_image: Set(article.featured_image.clone()),
            tags: Set(tags_to_json(&article.tags)),
            category: Set(article.category.clone()),
            status: Set(article.status.to_string()),
            published_at: Set(article.published_at.map(|dt| dt.fixed_offset())),
            author_id: Set(article.author_id.map(|id| id.0)),
            views: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_by_slug(
        &self,
        slug: &str,
        update: &ArticleUpdate,
    ) -> Result<Option<Article>, DomainError> {
        let Some(model) = articles::Entity::find()
            .filter(articles::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active: articles::ActiveModel = model.into();

        if let Some(title) = &update.title {
            active.title = Set(title.clone());
        }
        if let Some(new_slug) = &update.slug {
            active.slug = Set(new_slug.clone());
        }
        if let Some(excerpt) = &update.excerpt {
            active.excerpt = Set(Some(excerpt.clone()));
        }
        if let Some(content) = &update.content {
            active.content = Set(content.clone());
        }
        if let Some(image) = &update.featured_image {
            active.featured_image = Set(Some(image.clone()));
        }
        if let Some(tags) = &update.tags {
            active.tags = Set(tags_to_json(tags));
        }
        if let Some(category) = &update.category {
            active.category = Set(Some(category.clone()));
        }
        if let Some(status) = update.status {
            active.status = Set(status.to_string());
        }
        if let Some(published_at) = update.published_at {
            active.published_at = Set(Some(published_at.fixed_offset()));
        }
        active.updated_at = Set(Utc::now().fixed_offset());

        let result = active
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, DomainError> {
        let result = articles::Entity::delete_many()
            .filter(articles::Column::Slug.eq(slug))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn increment_views(&self, id: &ArticleId) -> Result<(), DomainError> {
        // Raw SQL for atomic increment
        let stmt = sea_orm::Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "UPDATE articles SET views = views + 1 WHERE id = $1",
            [id.0.into()],
        );

        self.db
            .execute(stmt)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

fn tags_to_json(tags: &[String]) -> Option<sea_orm::JsonValue> {
    if tags.is_empty() {
        None
    } else {
        Some(serde_json::json!(tags))
    }
}

fn tags_from_json(value: Option<sea_orm::JsonValue>) -> Vec<String> {
    value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Convert SeaORM model to domain entity
impl From<articles::Model> for Article {
    fn from(model: articles::Model) -> Self {
        Article {
            id: ArticleId(model.id),
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            featured_image: model.featured_image,
            tags: tags_from_json(model.tags),
            category: model.category,
            status: model
                .status
                .parse()
                .unwrap_or(ArticleStatus::Draft),
            published_at: model.published_at.map(|dt| dt.with_timezone(&Utc)),
            author_id: model.author_id.map(AdminUserId),
            views: model.views,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
