//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    NewCertification, NewShowcaseProject, Post, PostId, ProjectCategory,
};

/// Create a post with a fixed id and timestamp
pub fn test_post_at(id: Uuid, created_at: DateTime<Utc>, published: bool) -> Post {
    Post {
        id: PostId(id),
        title: format!("post-{}", id),
        body: "body".to_string(),
        published,
        created_at,
    }
}

/// Create a showcase project with default values
pub fn test_showcase_project(title: &str, category: ProjectCategory) -> NewShowcaseProject {
    NewShowcaseProject {
        title: title.to_string(),
        description: "A test project".to_string(),
        tech: vec!["rust".to_string()],
        year: "2024".to_string(),
        image: "/images/test.png".to_string(),
        website: None,
        github: None,
        role: None,
        skills: vec![],
        category,
    }
}

/// Create a certification with default values
pub fn test_certification(title: &str, issuer: &str) -> NewCertification {
    NewCertification {
        title: title.to_string(),
        description: "A test certification".to_string(),
        image: "/images/cert.png".to_string(),
        issuer: issuer.to_string(),
        date_issued: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        credential_id: None,
        credential_url: None,
    }
}
