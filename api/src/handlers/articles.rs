//! Article handlers
//!
//! Public blog reads and the admin CMS write path.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use super::Pagination;
use crate::app::article_service::{CreateArticle, UpdateArticle};
use crate::app::{AdminClaims, TaxonomyCount};
use crate::domain::entities::{AdminUserId, Article, ArticleFilter, ArticleStatus};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing articles
#[derive(Debug, Deserialize)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default = "default_page")]
    pub page: u64,
}

fn default_limit() -> u64 {
    10
}

fn default_page() -> u64 {
    1
}

/// One article on the wire
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
    pub author_id: Option<String>,
    pub views: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            content: article.content,
            featured_image: article.featured_image,
            tags: article.tags,
            category: article.category,
            status: article.status.to_string(),
            published_at: article.published_at.map(|dt| dt.to_rfc3339()),
            author_id: article.author_id.map(|id| id.to_string()),
            views: article.views,
            created_at: article.created_at.to_rfc3339(),
            updated_at: article.updated_at.to_rfc3339(),
        }
    }
}

/// Response for the article listing
#[derive(Debug, Serialize)]
pub struct ListArticlesResponse {
    pub articles: Vec<ArticleResponse>,
    pub pagination: Pagination,
}

/// GET /blog
pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ListArticlesQuery>,
) -> Result<Json<ListArticlesResponse>, AppError> {
    let filter = ArticleFilter {
        status: query
            .status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(ArticleStatus::Published),
        category: query.category,
        tag: query.tag,
        search: query.search,
    };

    let page_size = query.limit.clamp(1, 100);
    let (articles, total) = state
        .article_service
        .list(&filter, query.page, page_size)
        .await?;

    Ok(Json(ListArticlesResponse {
        articles: articles.into_iter().map(Into::into).collect(),
        pagination: Pagination::new(query.page.max(1), page_size, total),
    }))
}

/// Response wrapping a single article
#[derive(Debug, Serialize)]
pub struct ArticleEnvelope {
    pub article: ArticleResponse,
}

/// GET /blog/:slug
///
/// Published article by slug; bumps the view counter.
pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleEnvelope>, AppError> {
    let article = state
        .article_service
        .get_published(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))?;

    Ok(Json(ArticleEnvelope {
        article: article.into(),
    }))
}

/// Request to create an article
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// POST /blog
pub async fn create_article(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Json(request): Json<CreateArticleRequest>,
) -> Result<(StatusCode, Json<ArticleEnvelope>), AppError> {
    let status = parse_status(request.status.as_deref())?;

    let article = state
        .article_service
        .create(
            CreateArticle {
                title: request.title,
                excerpt: request.excerpt,
                content: request.content,
                featured_image: request.featured_image,
                tags: request.tags,
                category: request.category,
                status,
            },
            Some(AdminUserId(claims.sub)),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleEnvelope {
            article: article.into(),
        }),
    ))
}

/// Request to update an article
#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// PUT /blog/:slug
pub async fn update_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<Json<ArticleEnvelope>, AppError> {
    let status = parse_status(request.status.as_deref())?;

    let article = state
        .article_service
        .update(
            &slug,
            UpdateArticle {
                title: request.title,
                excerpt: request.excerpt,
                content: request.content,
                featured_image: request.featured_image,
                tags: request.tags,
                category: request.category,
                status,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))?;

    Ok(Json(ArticleEnvelope {
        article: article.into(),
    }))
}

/// Response for deletions
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// DELETE /blog/:slug
pub async fn delete_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !state.article_service.delete(&slug).await? {
        return Err(AppError::NotFound(format!("Article '{}' not found", slug)));
    }

    Ok(Json(DeleteResponse {
        message: "Article deleted successfully".to_string(),
    }))
}

/// Response for the category listing
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<TaxonomyCount>,
}

/// GET /blog/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    Ok(Json(CategoriesResponse {
        categories: state.article_service.categories().await?,
    }))
}

/// Response for the tag listing
#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<TaxonomyCount>,
}

/// GET /blog/tags
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<TagsResponse>, AppError> {
    Ok(Json(TagsResponse {
        tags: state.article_service.tags().await?,
    }))
}

fn parse_status(status: Option<&str>) -> Result<Option<ArticleStatus>, AppError> {
    status
        .map(|s| {
            s.parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid status: {}", s)))
        })
        .transpose()
}
