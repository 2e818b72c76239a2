//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod articles;
pub mod auth;
pub mod contact;
pub mod feed;
pub mod showcase;

pub use articles::{
    create_article, delete_article, get_article, list_articles, list_categories, list_tags,
    update_article,
};
pub use auth::login;
pub use contact::{list_contact_messages, submit_contact, update_contact_status};
pub use feed::{create_post, get_posts};
pub use showcase::{
    create_certification, create_project, delete_project, get_project, list_certifications,
    list_projects, update_project,
};

use serde::Serialize;

/// Offset-pagination envelope used by the article and contact listings
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        Self {
            page,
            page_size,
            total,
            total_pages: total.div_ceil(page_size.max(1)),
        }
    }
}
