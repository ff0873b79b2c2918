use super::error::CategoryServiceError;
use crate::domain::blog::listing;
use crate::domain::blog::{PaginationMeta, PostSummary};
use crate::domain::category::{CategoryPageResponse, CategoryResponse};
use crate::infrastructure::content::ContentRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CategoryService {
    content: Arc<dyn ContentRepository>,
    page_size: usize,
}

impl CategoryService {
    pub fn new(content: Arc<dyn ContentRepository>, page_size: usize) -> Self {
        Self { content, page_size }
    }
}

#[async_trait]
pub trait CategoryServiceApi: Send + Sync {
    async fn list(&self) -> Result<Vec<CategoryResponse>, CategoryServiceError>;

    /// The category named by `slug` plus one page of its posts, newest
    /// first. Membership is filtered here over the fetched set; the backend
    /// is never asked to filter.
    async fn get(
        &self,
        slug: &str,
        page: usize,
    ) -> Result<CategoryPageResponse, CategoryServiceError>;
}

#[async_trait]
impl CategoryServiceApi for CategoryService {
    async fn list(&self) -> Result<Vec<CategoryResponse>, CategoryServiceError> {
        let categories = self
            .content
            .fetch_categories()
            .await
            .map_err(CategoryServiceError::from)?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn get(
        &self,
        slug: &str,
        page: usize,
    ) -> Result<CategoryPageResponse, CategoryServiceError> {
        let category = self
            .content
            .fetch_categories()
            .await
            .map_err(CategoryServiceError::from)?
            .into_iter()
            .find(|c| c.slug == slug)
            .ok_or(CategoryServiceError::NotFound)?;

        let posts = self
            .content
            .fetch_posts()
            .await
            .map_err(CategoryServiceError::from)?;
        let members: Vec<_> = posts
            .into_iter()
            .filter(|post| post.in_category(slug))
            .collect();

        let window = listing::paginate(&members, "", page, self.page_size);
        let pagination = PaginationMeta::from(&window);

        Ok(CategoryPageResponse {
            category: CategoryResponse::from(category),
            posts: window.items.into_iter().map(PostSummary::from).collect(),
            pagination,
        })
    }
}
