//! Feed handlers
//!
//! The keyset-paginated post feed. Cursor fields arrive as plain query
//! strings and are parsed leniently: anything short of a complete,
//! well-formed (timestamp, id) pair means "first page", and an unusable
//! `limit` means the default page size. Input problems never turn into
//! hard failures here.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{FeedCursor, NewPost, Post};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for the feed
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// Parsed leniently; non-numeric values fall back to the default
    pub limit: Option<String>,
    pub cursor_ts: Option<String>,
    pub cursor_id: Option<String>,
}

/// One post on the wire
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            body: post.body,
            published: post.published,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// Cursor on the wire, echoing the request field names
#[derive(Debug, Serialize)]
pub struct CursorResponse {
    pub cursor_ts: String,
    pub cursor_id: String,
}

/// Response for the feed endpoint
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<PostResponse>,
    pub has_more: bool,
    pub next_cursor: Option<CursorResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /posts
///
/// Next page of published posts in (created_at, id) descending order.
pub async fn get_posts(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Json<FeedResponse> {
    let limit = query.limit.as_deref().and_then(|v| v.parse().ok());
    let cursor = FeedCursor::parse(query.cursor_ts.as_deref(), query.cursor_id.as_deref());

    let page = state.feed_service.fetch_page(cursor, limit).await;

    Json(FeedResponse {
        posts: page.posts.into_iter().map(Into::into).collect(),
        has_more: page.has_more,
        next_cursor: page.next_cursor.map(|c| CursorResponse {
            cursor_ts: c.ts.to_rfc3339(),
            cursor_id: c.id.to_string(),
        }),
        message: page.message,
    })
}

/// Request to create a feed post
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// Response for post creation
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub post: PostResponse,
}

/// POST /posts
///
/// Insert a post; the store assigns id and created_at.
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<CreatePostResponse>), AppError> {
    let post = state
        .feed_service
        .create_post(NewPost {
            title: request.title,
            body: request.body,
            published: request.published,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse { post: post.into() }),
    ))
}
