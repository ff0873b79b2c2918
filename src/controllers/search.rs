use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::blog::{BlogService, BlogServiceApi, SearchResponse},
    error::AppResult,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<usize>,
}

pub struct SearchController {
    blog_service: Arc<BlogService>,
}

impl SearchController {
    pub fn new(blog_service: Arc<BlogService>) -> Self {
        Self { blog_service }
    }

    /// GET /api/search - free-text search over the full post set.
    /// A missing query matches everything, like an empty search box.
    pub async fn search(
        State(controller): State<Arc<SearchController>>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<SearchResponse>> {
        let query = params.query.unwrap_or_default();
        let page = params.page.unwrap_or(1);
        let response = controller.blog_service.search(query, page).await?;
        Ok(Json(response))
    }
}
