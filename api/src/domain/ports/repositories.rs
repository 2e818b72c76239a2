//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    AdminUser, Article, ArticleFilter, ArticleId, ArticleUpdate, Certification, ContactMessage,
    ContactMessageId, ContactStatus, FeedCursor, NewArticle, NewCertification, NewContactMessage,
    NewPost, NewShowcaseProject, Post, ProjectCategory, ShowcaseProject, ShowcaseProjectId,
    ShowcaseProjectUpdate,
};
use crate::error::DomainError;

/// Repository for feed posts
///
/// The read methods back the keyset Feed Pager. All of them return
/// published posts only, ordered by (`created_at` desc, `id` desc).
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Top `limit` published posts (first page, no cursor)
    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError>;

    /// Published posts strictly below `cursor` under the composite order:
    /// `created_at < cursor.ts OR (created_at = cursor.ts AND id < cursor.id)`
    ///
    /// This is the correctness-critical comparison. Filtering on
    /// `created_at` alone would drop or duplicate posts that share the
    /// boundary timestamp.
    async fn list_published_before(
        &self,
        cursor: &FeedCursor,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError>;

    /// Fallback filter on `created_at < ts` only, for stores that cannot
    /// evaluate the composite comparison. Known precision loss: posts
    /// sharing the boundary timestamp may be skipped.
    async fn list_published_before_ts(
        &self,
        ts: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError>;

    /// Whether the store can evaluate the composite keyset comparison.
    /// Probed once at startup; the pager branches on the result instead of
    /// degrading reactively per call.
    async fn supports_keyset_filter(&self) -> bool;

    /// Insert a post; the store assigns `id` and `created_at`
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError>;
}

/// Repository for blog articles
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find an article by slug, optionally restricted to published ones
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<Article>, DomainError>;

    /// Whether a slug is already taken
    async fn slug_exists(&self, slug: &str) -> Result<bool, DomainError>;

    /// List articles matching `filter`, newest published_at first,
    /// 1-based page. Returns the page plus the total match count.
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Article>, u64), DomainError>;

    /// Categories and tags of all published articles, for count aggregation
    async fn list_published_taxonomy(
        &self,
    ) -> Result<Vec<(Option<String>, Vec<String>)>, DomainError>;

    /// Create a new article
    async fn create(&self, article: &NewArticle) -> Result<Article, DomainError>;

    /// Apply a partial update to the article with the given slug
    async fn update_by_slug(
        &self,
        slug: &str,
        update: &ArticleUpdate,
    ) -> Result<Option<Article>, DomainError>;

    /// Delete the article with the given slug; false if it did not exist
    async fn delete_by_slug(&self, slug: &str) -> Result<bool, DomainError>;

    /// Atomically bump the view counter
    async fn increment_views(&self, id: &ArticleId) -> Result<(), DomainError>;
}

/// Repository for showcase projects
#[async_trait]
pub trait ShowcaseProjectRepository: Send + Sync {
    async fn list(
        &self,
        category: Option<ProjectCategory>,
        limit: Option<u64>,
    ) -> Result<Vec<ShowcaseProject>, DomainError>;

    async fn find_by_id(
        &self,
        id: &ShowcaseProjectId,
    ) -> Result<Option<ShowcaseProject>, DomainError>;

    async fn create(&self, project: &NewShowcaseProject) -> Result<ShowcaseProject, DomainError>;

    async fn update(
        &self,
        id: &ShowcaseProjectId,
        update: &ShowcaseProjectUpdate,
    ) -> Result<Option<ShowcaseProject>, DomainError>;

    /// Delete a project; false if it did not exist
    async fn delete(&self, id: &ShowcaseProjectId) -> Result<bool, DomainError>;
}

/// Repository for certifications
#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn list(
        &self,
        issuer: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Vec<Certification>, DomainError>;

    async fn create(&self, cert: &NewCertification) -> Result<Certification, DomainError>;
}

/// Repository for contact messages
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError>;

    /// List messages newest first, optional status filter, 1-based page.
    /// Returns the page plus the total match count.
    async fn list(
        &self,
        status: Option<ContactStatus>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<ContactMessage>, u64), DomainError>;

    async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<Option<ContactMessage>, DomainError>;
}

/// Repository for admin users
#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError>;
}
