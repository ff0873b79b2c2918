use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::category::{CategoryPageResponse, CategoryResponse, CategoryService, CategoryServiceApi},
    error::AppResult,
};

#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub page: Option<usize>,
}

pub struct CategoryController {
    category_service: Arc<CategoryService>,
}

impl CategoryController {
    pub fn new(category_service: Arc<CategoryService>) -> Self {
        Self { category_service }
    }

    /// GET /api/categories - all categories
    pub async fn list_categories(
        State(controller): State<Arc<CategoryController>>,
    ) -> AppResult<Json<Vec<CategoryResponse>>> {
        let categories = controller.category_service.list().await?;
        Ok(Json(categories))
    }

    /// GET /api/categories/{slug} - one category with its posts, paginated
    pub async fn get_category(
        State(controller): State<Arc<CategoryController>>,
        Path(slug): Path<String>,
        Query(params): Query<CategoryParams>,
    ) -> AppResult<Json<CategoryPageResponse>> {
        let page = params.page.unwrap_or(1);
        let response = controller.category_service.get(&slug, page).await?;
        Ok(Json(response))
    }
}
