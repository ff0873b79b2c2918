use super::error::BlogServiceError;
use super::listing;
use crate::domain::blog::{BlogListResponse, PaginationMeta, PostDetailResponse, PostSummary, SearchResponse};
use crate::infrastructure::content::ContentRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct BlogService {
    content: Arc<dyn ContentRepository>,
    page_size: usize,
}

impl BlogService {
    pub fn new(content: Arc<dyn ContentRepository>, page_size: usize) -> Self {
        Self { content, page_size }
    }
}

#[async_trait]
pub trait BlogServiceApi: Send + Sync {
    /// One page of the listing view. The page's first post becomes the
    /// featured item; `query` narrows the set before paginating.
    async fn list_page(
        &self,
        page: usize,
        query: Option<String>,
    ) -> Result<BlogListResponse, BlogServiceError>;

    /// Search view over the same engine; no featured split.
    async fn search(&self, query: String, page: usize)
        -> Result<SearchResponse, BlogServiceError>;

    /// Reader view for a single post, with server-rendered markdown.
    async fn get_post(&self, slug: &str) -> Result<PostDetailResponse, BlogServiceError>;
}

#[async_trait]
impl BlogServiceApi for BlogService {
    async fn list_page(
        &self,
        page: usize,
        query: Option<String>,
    ) -> Result<BlogListResponse, BlogServiceError> {
        let posts = self
            .content
            .fetch_posts()
            .await
            .map_err(BlogServiceError::from)?;

        let window = listing::paginate(
            &posts,
            query.as_deref().unwrap_or(""),
            page,
            self.page_size,
        );
        let pagination = PaginationMeta::from(&window);

        let mut items = window.items.into_iter().map(PostSummary::from);
        let featured = items.next();
        let posts = items.collect();

        Ok(BlogListResponse {
            featured,
            posts,
            pagination,
        })
    }

    async fn search(
        &self,
        query: String,
        page: usize,
    ) -> Result<SearchResponse, BlogServiceError> {
        let posts = self
            .content
            .fetch_posts()
            .await
            .map_err(BlogServiceError::from)?;

        let window = listing::paginate(&posts, &query, page, self.page_size);
        let pagination = PaginationMeta::from(&window);

        Ok(SearchResponse {
            query: query.trim().to_string(),
            results: window.items.into_iter().map(PostSummary::from).collect(),
            pagination,
        })
    }

    async fn get_post(&self, slug: &str) -> Result<PostDetailResponse, BlogServiceError> {
        let post = self
            .content
            .fetch_post_by_slug(slug)
            .await
            .map_err(BlogServiceError::from)?;

        Ok(PostDetailResponse::from(post))
    }
}
