//! Feed service
//!
//! Keyset (cursor) pagination over the published post feed. Pages are
//! ordered by (`created_at` desc, `id` desc); the cursor is the sort key of
//! the last post served and the next page is everything strictly below it.
//! The service is a stateless reader: the only "state" is the cursor the
//! client round-trips back, so concurrent callers never interfere.
//!
//! Pages reflect the collection as it exists at each individual fetch.
//! There is no snapshot isolation across a pagination session; posts
//! inserted mid-walk appear or not depending on where their key sorts
//! relative to the cursor already handed out. That is standard keyset
//! behavior and intentional.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{FeedCursor, NewPost, Post};
use crate::domain::ports::PostRepository;
use crate::error::AppError;

/// How the store filters rows below the cursor boundary.
///
/// Resolved once at startup by probing the store, then branched on
/// deliberately; the pager never discovers degradation reactively per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeysetMode {
    /// Primary path: `created_at < ts OR (created_at = ts AND id < id)`.
    /// Exact: never skips or duplicates rows at a page boundary.
    Composite,
    /// Fallback for stores that cannot evaluate the composite comparison:
    /// `created_at < ts` only. Accepted, bounded correctness gap - posts
    /// sharing the exact boundary timestamp can be skipped.
    TimestampOnly,
}

impl KeysetMode {
    /// Probe the store once and pick the mode
    pub async fn detect<PR: PostRepository>(posts: &PR) -> Self {
        if posts.supports_keyset_filter().await {
            KeysetMode::Composite
        } else {
            KeysetMode::TimestampOnly
        }
    }
}

impl std::fmt::Display for KeysetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeysetMode::Composite => write!(f, "composite"),
            KeysetMode::TimestampOnly => write!(f, "timestamp-only"),
        }
    }
}

/// One page of the feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    /// Full page heuristic: true iff the store returned exactly `page_size`
    /// rows. May report true on an exactly-full final page; the next fetch
    /// then comes back empty.
    pub has_more: bool,
    /// Sort key of the last post in this page; `None` when empty
    pub next_cursor: Option<FeedCursor>,
    /// Set on the degraded (store unavailable) path so UIs can render an
    /// empty state without special-casing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeedPage {
    fn degraded(message: impl Into<String>) -> Self {
        Self {
            posts: Vec::new(),
            has_more: false,
            next_cursor: None,
            message: Some(message.into()),
        }
    }
}

/// Service producing stable, non-duplicating pages over the post feed
pub struct FeedService<PR>
where
    PR: PostRepository,
{
    posts: Arc<PR>,
    mode: KeysetMode,
    default_page_size: u64,
}

impl<PR> FeedService<PR>
where
    PR: PostRepository,
{
    pub fn new(posts: Arc<PR>, mode: KeysetMode, default_page_size: u64) -> Self {
        Self {
            posts,
            mode,
            default_page_size,
        }
    }

    pub fn mode(&self) -> KeysetMode {
        self.mode
    }

    /// Fetch one page of published posts.
    ///
    /// `cursor` absent means first page. A zero `page_size` (the handler
    /// already maps absent/unparseable to `None`) falls back to the default.
    /// Never fails past this boundary: a store error resolves to a degraded
    /// empty page carrying an informational message.
    pub async fn fetch_page(
        &self,
        cursor: Option<FeedCursor>,
        page_size: Option<u64>,
    ) -> FeedPage {
        let limit = match page_size {
            Some(n) if n > 0 => n,
            _ => self.default_page_size,
        };

        let result = match (cursor, self.mode) {
            (None, _) => self.posts.list_published(limit).await,
            (Some(c), KeysetMode::Composite) => {
                self.posts.list_published_before(&c, limit).await
            }
            (Some(c), KeysetMode::TimestampOnly) => {
                self.posts.list_published_before_ts(c.ts, limit).await
            }
        };

        match result {
            Ok(posts) => {
                let has_more = posts.len() as u64 == limit;
                let next_cursor = posts.last().map(Post::cursor);
                FeedPage {
                    posts,
                    has_more,
                    next_cursor,
                    message: None,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "post feed query failed, serving degraded empty page");
                FeedPage::degraded("post feed is not available yet")
            }
        }
    }

    /// Insert a post into the feed (admin write path)
    pub async fn create_post(&self, post: NewPost) -> Result<Post, AppError> {
        if post.title.is_empty() || post.body.is_empty() {
            return Err(AppError::BadRequest(
                "Title and body are required".to_string(),
            ));
        }

        Ok(self.posts.create(&post).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::test_utils::{test_post_at, InMemoryPostRepository};

    fn uuid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    async fn service_with(
        repo: Arc<InMemoryPostRepository>,
        page_size: u64,
    ) -> FeedService<InMemoryPostRepository> {
        let mode = KeysetMode::detect(repo.as_ref()).await;
        FeedService::new(repo, mode, page_size)
    }

    /// Walk the whole feed chaining next_cursor forward
    async fn walk(service: &FeedService<InMemoryPostRepository>, page_size: u64) -> Vec<Post> {
        let mut all = Vec::new();
        let mut cursor = None;
        let mut calls = 0;
        loop {
            let page = service.fetch_page(cursor, Some(page_size)).await;
            calls += 1;
            assert!(calls <= 100, "pagination did not terminate");
            all.extend(page.posts.clone());
            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
        }
        all
    }

    #[tokio::test]
    async fn full_walk_returns_each_post_exactly_once_in_order() {
        let repo = Arc::new(InMemoryPostRepository::new());
        for n in 0..25u32 {
            repo.seed(test_post_at(
                uuid(n as u128 + 1),
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, n).unwrap(),
                true,
            ));
        }
        let service = service_with(repo, 10).await;

        let all = walk(&service, 4).await;

        assert_eq!(all.len(), 25);
        for pair in all.windows(2) {
            let a = (pair[0].created_at, pair[0].id.0);
            let b = (pair[1].created_at, pair[1].id.0);
            assert!(a > b, "feed not strictly descending");
        }
        let mut ids: Vec<_> = all.iter().map(|p| p.id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), 25, "duplicate post in walk");
    }

    #[tokio::test]
    async fn same_timestamp_ties_are_never_lost_on_composite_path() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        // Four posts sharing one timestamp plus one older
        for n in 1..=4u128 {
            repo.seed(test_post_at(uuid(n), ts, true));
        }
        repo.seed(test_post_at(
            uuid(99),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            true,
        ));
        let service = service_with(repo, 10).await;
        assert_eq!(service.mode(), KeysetMode::Composite);

        // Page size 2 forces a boundary inside the tied group
        let all = walk(&service, 2).await;

        assert_eq!(all.len(), 5);
        let tied: Vec<_> = all
            .iter()
            .filter(|p| p.created_at == ts)
            .map(|p| p.id.0)
            .collect();
        assert_eq!(tied, vec![uuid(4), uuid(3), uuid(2), uuid(1)]);
    }

    #[tokio::test]
    async fn terminates_within_ceil_n_over_page_size_calls() {
        let repo = Arc::new(InMemoryPostRepository::new());
        for n in 0..7u32 {
            repo.seed(test_post_at(
                uuid(n as u128 + 1),
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, n).unwrap(),
                true,
            ));
        }
        let service = service_with(repo, 10).await;

        let mut cursor = None;
        let mut calls = 0;
        loop {
            let page = service.fetch_page(cursor, Some(3)).await;
            calls += 1;
            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
        }
        // ceil(7 / 3) = 3
        assert!(calls <= 3, "took {} calls", calls);
    }

    #[tokio::test]
    async fn timestamp_only_fallback_skips_boundary_ties_as_documented() {
        let repo = Arc::new(InMemoryPostRepository::new().without_keyset_filter());
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        repo.seed(test_post_at(uuid(1), ts, true));
        repo.seed(test_post_at(uuid(2), ts, true));
        let service = service_with(repo, 10).await;
        assert_eq!(service.mode(), KeysetMode::TimestampOnly);

        // First page ends inside the tied pair
        let first = service.fetch_page(None, Some(1)).await;
        assert_eq!(first.posts.len(), 1);
        assert_eq!(first.posts[0].id.0, uuid(2));

        // The fallback filters on created_at alone, so the second tied post
        // is skipped at the boundary. This loss is the documented behavior
        // of the degraded path, not a bug to fix here.
        let second = service.fetch_page(first.next_cursor, Some(1)).await;
        assert!(second.posts.is_empty());
    }

    #[tokio::test]
    async fn unpublished_posts_never_appear() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        repo.seed(test_post_at(uuid(1), ts, true));
        repo.seed(test_post_at(uuid(2), ts, false));
        repo.seed(test_post_at(
            uuid(3),
            Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
            false,
        ));
        let service = service_with(repo, 10).await;

        let all = walk(&service, 2).await;

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id.0, uuid(1));
    }

    #[tokio::test]
    async fn two_page_scenario_with_tie_at_boundary() {
        // A(ts=10,id=5), B(ts=10,id=3), C(ts=9,id=8)
        let repo = Arc::new(InMemoryPostRepository::new());
        let ts10 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 10).unwrap();
        let ts9 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 9).unwrap();
        repo.seed(test_post_at(uuid(5), ts10, true));
        repo.seed(test_post_at(uuid(3), ts10, true));
        repo.seed(test_post_at(uuid(8), ts9, true));
        let service = service_with(repo, 10).await;

        let first = service.fetch_page(None, Some(2)).await;
        assert_eq!(
            first.posts.iter().map(|p| p.id.0).collect::<Vec<_>>(),
            vec![uuid(5), uuid(3)]
        );
        assert!(first.has_more);
        assert_eq!(
            first.next_cursor,
            Some(FeedCursor {
                ts: ts10,
                id: uuid(3)
            })
        );

        let second = service.fetch_page(first.next_cursor, Some(2)).await;
        assert_eq!(
            second.posts.iter().map(|p| p.id.0).collect::<Vec<_>>(),
            vec![uuid(8)]
        );
        assert!(!second.has_more);
        assert_eq!(
            second.next_cursor,
            Some(FeedCursor {
                ts: ts9,
                id: uuid(8)
            })
        );
    }

    #[tokio::test]
    async fn empty_collection_yields_empty_terminal_page() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let service = service_with(repo, 10).await;

        let page = service.fetch_page(None, None).await;

        assert!(page.posts.is_empty());
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
        assert!(page.message.is_none());
    }

    #[tokio::test]
    async fn store_outage_resolves_to_degraded_page_not_error() {
        let repo = Arc::new(InMemoryPostRepository::new());
        repo.seed(test_post_at(
            uuid(1),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            true,
        ));
        let service = service_with(repo.clone(), 10).await;

        repo.set_unavailable(true);
        let page = service.fetch_page(None, Some(5)).await;

        assert!(page.posts.is_empty());
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
        assert!(page.message.is_some());
    }

    #[tokio::test]
    async fn invalid_page_size_falls_back_to_default() {
        let repo = Arc::new(InMemoryPostRepository::new());
        for n in 0..15u32 {
            repo.seed(test_post_at(
                uuid(n as u128 + 1),
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, n).unwrap(),
                true,
            ));
        }
        let service = service_with(repo, 10).await;

        let page = service.fetch_page(None, Some(0)).await;
        assert_eq!(page.posts.len(), 10);

        let page = service.fetch_page(None, None).await;
        assert_eq!(page.posts.len(), 10);
    }

    #[tokio::test]
    async fn create_post_requires_title_and_body() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let service = service_with(repo, 10).await;

        let err = service
            .create_post(NewPost {
                title: String::new(),
                body: "body".to_string(),
                published: true,
            })
            .await;
        assert!(err.is_err());

        let post = service
            .create_post(NewPost {
                title: "hello".to_string(),
                body: "world".to_string(),
                published: true,
            })
            .await
            .unwrap();
        assert_eq!(post.title, "hello");
    }
}
