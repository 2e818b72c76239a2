//! Certification domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a certification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificationId(pub Uuid);

impl std::fmt::Display for CertificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A professional certification displayed on the site
#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub id: CertificationId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub issuer: String,
    pub date_issued: NaiveDate,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a certification
#[derive(Debug, Clone)]
pub struct NewCertification {
    pub title: String,
    pub description: String,
    pub image: String,
    pub issuer: String,
    pub date_issued: NaiveDate,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}
