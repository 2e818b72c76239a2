//! Showcase project domain entity
//!
//! Portfolio projects displayed on the marketing pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a showcase project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowcaseProjectId(pub Uuid);

impl std::fmt::Display for ShowcaseProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project category shown as a filter tab on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "full-stack")]
    FullStack,
    #[serde(rename = "blockchain")]
    Blockchain,
    #[serde(rename = "ai")]
    Ai,
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectCategory::FullStack => write!(f, "full-stack"),
            ProjectCategory::Blockchain => write!(f, "blockchain"),
            ProjectCategory::Ai => write!(f, "ai"),
        }
    }
}

impl std::str::FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-stack" => Ok(ProjectCategory::FullStack),
            "blockchain" => Ok(ProjectCategory::Blockchain),
            "ai" => Ok(ProjectCategory::Ai),
            _ => Err(format!("Unknown project category: {}", s)),
        }
    }
}

/// A portfolio project
#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseProject {
    pub id: ShowcaseProjectId,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub year: String,
    pub image: String,
    pub website: Option<String>,
    pub github: Option<String>,
    pub role: Option<String>,
    pub skills: Vec<String>,
    pub category: ProjectCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a showcase project
#[derive(Debug, Clone)]
pub struct NewShowcaseProject {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub year: String,
    pub image: String,
    pub website: Option<String>,
    pub github: Option<String>,
    pub role: Option<String>,
    pub skills: Vec<String>,
    pub category: ProjectCategory,
}

/// Partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct ShowcaseProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub year: Option<String>,
    pub image: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
    pub category: Option<ProjectCategory>,
}
