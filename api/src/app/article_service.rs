//! Article service
//!
//! CMS operations for blog articles: slug generation, listing with
//! filters, publish transitions, and the categories/tags taxonomy.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::entities::{
    Article, ArticleFilter, ArticleStatus, ArticleUpdate, NewArticle,
};
use crate::domain::ports::ArticleRepository;
use crate::error::AppError;

/// A taxonomy value (category or tag) with its published-article count
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomyCount {
    pub name: String,
    pub count: u64,
}

/// Derive a URL slug from a title: lowercase, alphanumeric runs joined
/// by single dashes, no leading or trailing dash.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Fields accepted when creating an article
#[derive(Debug, Clone)]
pub struct CreateArticle {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub status: Option<ArticleStatus>,
}

/// Fields accepted when updating an article; `None` leaves unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<ArticleStatus>,
}

/// Service for managing blog articles
pub struct ArticleService<AR>
where
    AR: ArticleRepository,
{
    articles: Arc<AR>,
}

impl<AR> ArticleService<AR>
where
    AR: ArticleRepository,
{
    pub fn new(articles: Arc<AR>) -> Self {
        Self { articles }
    }

    /// List articles matching the filter; returns the page and total count
    pub async fn list(
        &self,
        filter: &ArticleFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Article>, u64), AppError> {
        Ok(self.articles.list(filter, page.max(1), page_size).await?)
    }

    /// Fetch a published article by slug and bump its view counter.
    /// The increment is best-effort; a failure is logged, not surfaced.
    pub async fn get_published(&self, slug: &str) -> Result<Option<Article>, AppError> {
        let Some(mut article) = self.articles.find_by_slug(slug, true).await? else {
            return Ok(None);
        };

        if let Err(e) = self.articles.increment_views(&article.id).await {
            tracing::warn!(error = %e, slug, "failed to increment article views");
        } else {
            article.views += 1;
        }

        Ok(Some(article))
    }

    /// Create an article. The slug derives from the title; a collision is
    /// resolved by suffixing the current epoch millis.
    pub async fn create(
        &self,
        input: CreateArticle,
        author_id: Option<crate::domain::entities::AdminUserId>,
    ) -> Result<Article, AppError> {
        if input.title.is_empty() || input.content.is_empty() {
            return Err(AppError::BadRequest(
                "Title and content are required".to_string(),
            ));
        }

        let base_slug = slugify(&input.title);
        let slug = if self.articles.slug_exists(&base_slug).await? {
            format!("{}-{}", base_slug, Utc::now().timestamp_millis())
        } else {
            base_slug
        };

        let status = input.status.unwrap_or(ArticleStatus::Draft);
        let published_at = (status == ArticleStatus::Published).then(Utc::now);

        let article = self
            .articles
            .create(&NewArticle {
                title: input.title,
                slug,
                excerpt: input.excerpt,
                content: input.content,
                featured_image: input.featured_image,
                tags: input.tags,
                category: input.category,
                status,
                published_at,
                author_id,
            })
            .await?;

        Ok(article)
    }

    /// Apply a partial update. A title change regenerates the slug; a
    /// transition to published stamps `published_at`.
    pub async fn update(
        &self,
        slug: &str,
        input: UpdateArticle,
    ) -> Result<Option<Article>, AppError> {
        let mut update = ArticleUpdate {
            excerpt: input.excerpt,
            content: input.content,
            featured_image: input.featured_image,
            tags: input.tags,
            category: input.category,
            status: input.status,
            ..Default::default()
        };

        if let Some(title) = input.title {
            update.slug = Some(slugify(&title));
            update.title = Some(title);
        }

        if input.status == Some(ArticleStatus::Published) {
            update.published_at = Some(Utc::now());
        }

        Ok(self.articles.update_by_slug(slug, &update).await?)
    }

    /// Delete an article by slug; false if it did not exist
    pub async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.articles.delete_by_slug(slug).await?)
    }

    /// Distinct categories of published articles with counts
    pub async fn categories(&self) -> Result<Vec<TaxonomyCount>, AppError> {
        let taxonomy = self.articles.list_published_taxonomy().await?;
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for (category, _) in taxonomy {
            if let Some(category) = category {
                *counts.entry(category).or_default() += 1;
            }
        }
        Ok(to_counts(counts))
    }

    /// Distinct tags of published articles with counts
    pub async fn tags(&self) -> Result<Vec<TaxonomyCount>, AppError> {
        let taxonomy = self.articles.list_published_taxonomy().await?;
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for (_, tags) in taxonomy {
            for tag in tags {
                *counts.entry(tag).or_default() += 1;
            }
        }
        Ok(to_counts(counts))
    }
}

fn to_counts(counts: BTreeMap<String, u64>) -> Vec<TaxonomyCount> {
    counts
        .into_iter()
        .map(|(name, count)| TaxonomyCount { name, count })
        .collect()
}
