//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod article_service;
pub mod auth_service;
pub mod contact_service;
pub mod feed_service;
pub mod showcase_service;

pub use article_service::{ArticleService, CreateArticle, TaxonomyCount, UpdateArticle};
pub use auth_service::{AdminClaims, AuthService};
pub use contact_service::ContactService;
pub use feed_service::{FeedPage, FeedService, KeysetMode};
pub use showcase_service::ShowcaseService;
