use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::blog::{BlogListResponse, BlogService, BlogServiceApi, PostDetailResponse},
    error::AppResult,
};

/// Listing view state carried in the URL so pages stay bookmarkable
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub query: Option<String>,
}

pub struct BlogController {
    blog_service: Arc<BlogService>,
}

impl BlogController {
    pub fn new(blog_service: Arc<BlogService>) -> Self {
        Self { blog_service }
    }

    /// GET /api/blogs - paginated listing with optional filter
    pub async fn list_posts(
        State(controller): State<Arc<BlogController>>,
        Query(params): Query<ListParams>,
    ) -> AppResult<Json<BlogListResponse>> {
        let page = params.page.unwrap_or(1);
        let response = controller
            .blog_service
            .list_page(page, params.query)
            .await?;
        Ok(Json(response))
    }

    /// GET /api/blogs/{slug} - single-post reader view
    pub async fn get_post(
        State(controller): State<Arc<BlogController>>,
        Path(slug): Path<String>,
    ) -> AppResult<Json<PostDetailResponse>> {
        let response = controller.blog_service.get_post(&slug).await?;
        Ok(Json(response))
    }
}
