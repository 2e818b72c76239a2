//! Port traits

pub mod repositories;

pub use repositories::{
    AdminUserRepository, ArticleRepository, CertificationRepository, ContactMessageRepository,
    PostRepository, ShowcaseProjectRepository,
};
