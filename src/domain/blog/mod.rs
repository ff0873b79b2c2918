pub mod error;
pub mod listing;
pub mod markdown;
pub mod model;
pub mod service;

pub use error::BlogServiceError;
pub use model::{Author, CoverImage, Post};
pub use service::{BlogService, BlogServiceApi};

use serde::{Deserialize, Serialize};

use crate::domain::category::CategoryResponse;
use chrono::{DateTime, Utc};
use self::listing::PageWindow;

/// Pagination block shared by every listing-shaped response
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
}

impl From<&PageWindow> for PaginationMeta {
    fn from(window: &PageWindow) -> Self {
        Self {
            page: window.page,
            page_size: window.page_size,
            page_count: window.total_pages,
            total: window.total,
        }
    }
}

/// Card-sized projection of a post for listing and search views
#[derive(Debug, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// First category name, shown as the card badge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostSummary {
    fn from(post: Post) -> Self {
        let category = post.primary_category().map(str::to_string);
        Self {
            slug: post.slug,
            title: post.title,
            description: post.description,
            cover_url: post.cover.map(|c| c.url),
            category,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Response for the paginated listing view: the page's first post is pulled
/// out as the featured item, the rest fill the grid.
#[derive(Debug, Serialize, Deserialize)]
pub struct BlogListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<PostSummary>,
    pub posts: Vec<PostSummary>,
    pub pagination: PaginationMeta,
}

/// Response for the search view
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<PostSummary>,
    pub pagination: PaginationMeta,
}

/// Response for the single-post reader view
#[derive(Debug, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub content_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub categories: Vec<CategoryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostDetailResponse {
    fn from(post: Post) -> Self {
        let content_html = markdown::render(&post.content);
        Self {
            slug: post.slug,
            title: post.title,
            description: post.description,
            content: post.content,
            content_html,
            cover_url: post.cover.map(|c| c.url),
            categories: post.categories.into_iter().map(CategoryResponse::from).collect(),
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
