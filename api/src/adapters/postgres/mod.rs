//! PostgreSQL adapters

pub mod admin_user_repo;
pub mod article_repo;
pub mod certification_repo;
pub mod contact_repo;
pub mod post_repo;
pub mod showcase_project_repo;

pub use admin_user_repo::PostgresAdminUserRepository;
pub use article_repo::PostgresArticleRepository;
pub use certification_repo::PostgresCertificationRepository;
pub use contact_repo::PostgresContactMessageRepository;
pub use post_repo::PostgresPostRepository;
pub use showcase_project_repo::PostgresShowcaseProjectRepository;
