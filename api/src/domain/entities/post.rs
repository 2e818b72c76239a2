//! Post domain entity
//!
//! The unit of the public feed. Posts are append-heavy and ordered by
//! (`created_at`, `id`) descending. That pair is the sort and cursor key:
//! `created_at` alone admits ties (two inserts in the same timestamp tick),
//! and paginating on it alone would duplicate or skip rows at a page
//! boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A feed post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// Only published posts are ever surfaced by the feed
    pub published: bool,
    /// Store-assigned at insert, immutable
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// The keyset cursor pointing at this post
    pub fn cursor(&self) -> FeedCursor {
        FeedCursor {
            ts: self.created_at,
            id: self.id.0,
        }
    }
}

/// Fields for creating a post; `id` and `created_at` are store-assigned
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub published: bool,
}

/// Keyset cursor: the (`created_at`, `id`) pair of the last record returned
/// in the previous page.
///
/// Round-tripped through the client and never persisted server-side. The
/// next page is everything strictly below this pair under the composite
/// descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCursor {
    pub ts: DateTime<Utc>,
    pub id: Uuid,
}

impl FeedCursor {
    /// Parse the two wire fields into a cursor.
    ///
    /// Both must be present and well-formed; anything else means "no
    /// cursor" (first page) rather than an error, per the feed contract.
    pub fn parse(ts: Option<&str>, id: Option<&str>) -> Option<Self> {
        let ts = DateTime::parse_from_rfc3339(ts?).ok()?.with_timezone(&Utc);
        let id = Uuid::parse_str(id?).ok()?;
        Some(Self { ts, id })
    }
}
