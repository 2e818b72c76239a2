//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They
//! store data behind RwLocks and let tests verify behavior without a
//! database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::domain::entities::{
    AdminUser, Article, ArticleFilter, ArticleId, ArticleStatus, ArticleUpdate, Certification,
    CertificationId, ContactMessage, ContactMessageId, ContactStatus, FeedCursor, NewArticle,
    NewCertification, NewContactMessage, NewPost, NewShowcaseProject, Post, PostId,
    ProjectCategory, ShowcaseProject, ShowcaseProjectId, ShowcaseProjectUpdate,
};
use crate::domain::ports::{
    AdminUserRepository, ArticleRepository, CertificationRepository, ContactMessageRepository,
    PostRepository, ShowcaseProjectRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Post Repository
// ============================================================================

/// In-memory post store for feed tests.
///
/// Two knobs model the store's failure shapes:
/// - `without_keyset_filter()` makes the composite boundary query fail,
///   so the startup probe resolves to the timestamp-only fallback
/// - `set_unavailable(true)` makes every query fail, modeling an outage
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
    keyset_filter: bool,
    unavailable: AtomicBool,
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(Vec::new())),
            keyset_filter: true,
            unavailable: AtomicBool::new(false),
        }
    }

    /// Simulate a store that cannot evaluate the composite comparison
    pub fn without_keyset_filter(mut self) -> Self {
        self.keyset_filter = false;
        self
    }

    /// Toggle a simulated outage
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Insert a pre-built post directly
    pub fn seed(&self, post: Post) {
        self.posts.write().unwrap().push(post);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::Unavailable(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn sorted_published(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0))
        });
        posts
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_published(&self, limit: u64) -> Result<Vec<Post>, DomainError> {
        self.check_available()?;
        Ok(self
            .sorted_published()
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn list_published_before(
        &self,
        cursor: &FeedCursor,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        self.check_available()?;
        if !self.keyset_filter {
            return Err(DomainError::Database(
                "composite keyset filter not supported".to_string(),
            ));
        }
        Ok(self
            .sorted_published()
            .into_iter()
            .filter(|p| {
                p.created_at < cursor.ts
                    || (p.created_at == cursor.ts && p.id.0 < cursor.id)
            })
            .take(limit as usize)
            .collect())
    }

    async fn list_published_before_ts(
        &self,
        ts: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Post>, DomainError> {
        self.check_available()?;
        Ok(self
            .sorted_published()
            .into_iter()
            .filter(|p| p.created_at < ts)
            .take(limit as usize)
            .collect())
    }

    async fn supports_keyset_filter(&self) -> bool {
        let probe = FeedCursor {
            ts: Utc::now(),
            id: Uuid::nil(),
        };
        self.list_published_before(&probe, 1).await.is_ok()
    }

    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        self.check_available()?;
        let created = Post {
            id: PostId::new(),
            title: post.title.clone(),
            body: post.body.clone(),
            published: post.published,
            created_at: Utc::now(),
        };
        self.posts.write().unwrap().push(created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory Article Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: Arc<RwLock<Vec<Article>>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(article: &Article, filter: &ArticleFilter) -> bool {
        if article.status != filter.status {
            return false;
        }
        if let Some(category) = &filter.category {
            if article.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(tag) = &filter.tag {
            if !article.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let s = search.to_lowercase();
            let hit = article.title.to_lowercase().contains(&s)
                || article
                    .excerpt
                    .as_deref()
                    .is_some_and(|e| e.to_lowercase().contains(&s))
                || article.content.to_lowercase().contains(&s);
            if !hit {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_slug(
        &self,
        slug: &str,
        published_only: bool,
    ) -> Result<Option<Article>, DomainError> {
        let articles = self.articles.read().unwrap();
        Ok(articles
            .iter()
            .find(|a| {
                a.slug == slug && (!published_only || a.status == ArticleStatus::Published)
            })
            .cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, DomainError> {
        let articles = self.articles.read().unwrap();
        Ok(articles.iter().any(|a| a.slug == slug))
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Article>, u64), DomainError> {
        let mut matched: Vec<Article> = self
            .articles
            .read()
            .unwrap()
            .iter()
            .filter(|a| Self::matches(a, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            (b.published_at, b.created_at).cmp(&(a.published_at, a.created_at))
        });

        let total = matched.len() as u64;
        let start = ((page.saturating_sub(1)) * page_size) as usize;
        let page_items = matched
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Ok((page_items, total))
    }

    async fn list_published_taxonomy(
        &self,
    ) -> Result<Vec<(Option<String>, Vec<String>)>, DomainError> {
        let articles = self.articles.read().unwrap();
        Ok(articles
            .iter()
            .filter(|a| a.status == ArticleStatus::Published)
            .map(|a| (a.category.clone(), a.tags.clone()))
            .collect())
    }

    async fn create(&self, article: &NewArticle) -> Result<Article, DomainError> {
        let now = Utc::now();
        let created = Article {
            id: ArticleId::new(),
            title: article.title.clone(),
            slug: article.slug.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            featured_image: article.featured_image.clone(),
            tags: article.tags.clone(),
            category: article.category.clone(),
            status: article.status,
            published_at: article.published_at,
            author_id: article.author_id,
            views: 0,
            created_at: now,
            updated_at: now,
        };
        self.articles.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_by_slug(
        &self,
        slug: &str,
        update: &ArticleUpdate,
    ) -> Result<Option<Article>, DomainError> {
        let mut articles = self.articles.write().unwrap();
        let Some(article) = articles.iter_mut().find(|a| a.slug == slug) else {
            return Ok(None);
        };

        if let Some(title) = &update.title {
            article.title = title.clone();
        }
        if let Some(new_slug) = &update.slug {
            article.slug = new_slug.clone();
        }
        if let Some(excerpt) = &update.excerpt {
            article.excerpt = Some(excerpt.clone());
        }
        if let Some(content) = &update.content {
            article.content = content.clone();
        }
        if let Some(image) = &update.featured_image {
            article.featured_image = Some(image.clone());
        }
        if let Some(tags) = &update.tags {
            article.tags = tags.clone();
        }
        if let Some(category) = &update.category {
            article.category = Some(category.clone());
        }
        if let Some(status) = update.status {
            article.status = status;
        }
        if let Some(published_at) = update.published_at {
            article.published_at = Some(published_at);
        }
        article.updated_at = Utc::now();

        Ok(Some(article.clone()))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, DomainError> {
        let mut articles = self.articles.write().unwrap();
        let before = articles.len();
        articles.retain(|a| a.slug != slug);
        Ok(articles.len() < before)
    }

    async fn increment_views(&self, id: &ArticleId) -> Result<(), DomainError> {
        let mut articles = self.articles.write().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| a.id == *id) {
            article.views += 1;
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Showcase Project Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryShowcaseProjectRepository {
    projects: Arc<RwLock<Vec<ShowcaseProject>>>,
}

impl InMemoryShowcaseProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShowcaseProjectRepository for InMemoryShowcaseProjectRepository {
    async fn list(
        &self,
        category: Option<ProjectCategory>,
        limit: Option<u64>,
    ) -> Result<Vec<ShowcaseProject>, DomainError> {
        let mut projects: Vec<ShowcaseProject> = self
            .projects
            .read()
            .unwrap()
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            projects.truncate(limit as usize);
        }
        Ok(projects)
    }

    async fn find_by_id(
        &self,
        id: &ShowcaseProjectId,
    ) -> Result<Option<ShowcaseProject>, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects.iter().find(|p| p.id == *id).cloned())
    }

    async fn create(&self, project: &NewShowcaseProject) -> Result<ShowcaseProject, DomainError> {
        let now = Utc::now();
        let created = ShowcaseProject {
            id: ShowcaseProjectId(Uuid::new_v4()),
            title: project.title.clone(),
            description: project.description.clone(),
            tech: project.tech.clone(),
            year: project.year.clone(),
            image: project.image.clone(),
            website: project.website.clone(),
            github: project.github.clone(),
            role: project.role.clone(),
            skills: project.skills.clone(),
            category: project.category,
            created_at: now,
            updated_at: now,
        };
        self.projects.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &ShowcaseProjectId,
        update: &ShowcaseProjectUpdate,
    ) -> Result<Option<ShowcaseProject>, DomainError> {
        let mut projects = self.projects.write().unwrap();
        let Some(project) = projects.iter_mut().find(|p| p.id == *id) else {
            return Ok(None);
        };

        if let Some(title) = &update.title {
            project.title = title.clone();
        }
        if let Some(description) = &update.description {
            project.description = description.clone();
        }
        if let Some(tech) = &update.tech {
            project.tech = tech.clone();
        }
        if let Some(year) = &update.year {
            project.year = year.clone();
        }
        if let Some(image) = &update.image {
            project.image = image.clone();
        }
        if let Some(website) = &update.website {
            project.website = Some(website.clone());
        }
        if let Some(github) = &update.github {
            project.github = Some(github.clone());
        }
        if let Some(role) = &update.role {
            project.role = Some(role.clone());
        }
        if let Some(skills) = &update.skills {
            project.skills = skills.clone();
        }
        if let Some(category) = update.category {
            project.category = category;
        }
        project.updated_at = Utc::now();

        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: &ShowcaseProjectId) -> Result<bool, DomainError> {
        let mut projects = self.projects.write().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != *id);
        Ok(projects.len() < before)
    }
}

// ============================================================================
// In-Memory Certification Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCertificationRepository {
    certifications: Arc<RwLock<Vec<Certification>>>,
}

impl InMemoryCertificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CertificationRepository for InMemoryCertificationRepository {
    async fn list(
        &self,
        issuer: Option<&str>,
        limit: Option<u64>,
    ) -> Result<Vec<Certification>, DomainError> {
        let mut certs: Vec<Certification> = self
            .certifications
            .read()
            .unwrap()
            .iter()
            .filter(|c| issuer.is_none_or(|i| c.issuer == i))
            .cloned()
            .collect();
        certs.sort_by(|a, b| b.date_issued.cmp(&a.date_issued));
        if let Some(limit) = limit {
            certs.truncate(limit as usize);
        }
        Ok(certs)
    }

    async fn create(&self, cert: &NewCertification) -> Result<Certification, DomainError> {
        let now = Utc::now();
        let created = Certification {
            id: CertificationId(Uuid::new_v4()),
            title: cert.title.clone(),
            description: cert.description.clone(),
            image: cert.image.clone(),
            issuer: cert.issuer.clone(),
            date_issued: cert.date_issued,
            credential_id: cert.credential_id.clone(),
            credential_url: cert.credential_url.clone(),
            created_at: now,
            updated_at: now,
        };
        self.certifications.write().unwrap().push(created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory Contact Message Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryContactMessageRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl InMemoryContactMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        let now = Utc::now();
        let created = ContactMessage {
            id: ContactMessageId(Uuid::new_v4()),
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            status: ContactStatus::New,
            created_at: now,
            updated_at: now,
        };
        self.messages.write().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(
        &self,
        status: Option<ContactStatus>,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<ContactMessage>, u64), DomainError> {
        let mut matched: Vec<ContactMessage> = self
            .messages
            .read()
            .unwrap()
            .iter()
            .filter(|m| status.is_none_or(|s| m.status == s))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matched.len() as u64;
        let start = ((page.saturating_sub(1)) * page_size) as usize;
        let page_items = matched
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Ok((page_items, total))
    }

    async fn update_status(
        &self,
        id: &ContactMessageId,
        status: ContactStatus,
    ) -> Result<Option<ContactMessage>, DomainError> {
        let mut messages = self.messages.write().unwrap();
        let Some(message) = messages.iter_mut().find(|m| m.id == *id) else {
            return Ok(None);
        };
        message.status = status;
        message.updated_at = Utc::now();
        Ok(Some(message.clone()))
    }
}

// ============================================================================
// In-Memory Admin User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAdminUserRepository {
    admins: Arc<RwLock<Vec<AdminUser>>>,
}

impl InMemoryAdminUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an admin for testing
    pub fn with_admin(self, admin: AdminUser) -> Self {
        self.admins.write().unwrap().push(admin);
        self
    }
}

#[async_trait]
impl AdminUserRepository for InMemoryAdminUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DomainError> {
        let admins = self.admins.read().unwrap();
        Ok(admins.iter().find(|a| a.email == email).cloned())
    }
}
