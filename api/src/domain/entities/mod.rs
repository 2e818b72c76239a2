//! Domain entities

pub mod admin;
pub mod article;
pub mod certification;
pub mod contact;
pub mod post;
pub mod showcase_project;

pub use admin::{AdminRole, AdminUser, AdminUserId};
pub use article::{Article, ArticleFilter, ArticleId, ArticleStatus, ArticleUpdate, NewArticle};
pub use certification::{Certification, CertificationId, NewCertification};
pub use contact::{ContactMessage, ContactMessageId, ContactStatus, NewContactMessage};
pub use post::{FeedCursor, NewPost, Post, PostId};
pub use showcase_project::{
    NewShowcaseProject, ProjectCategory, ShowcaseProject, ShowcaseProjectId, ShowcaseProjectUpdate,
};
