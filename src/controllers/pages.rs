use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::pages::{PagesService, PagesServiceApi, SitePage, SitePageLink},
    error::AppResult,
};

pub struct PagesController {
    pages_service: Arc<PagesService>,
}

impl PagesController {
    pub fn new(pages_service: Arc<PagesService>) -> Self {
        Self { pages_service }
    }

    /// GET /api/pages - links for the navigation menu
    pub async fn list_pages(
        State(controller): State<Arc<PagesController>>,
    ) -> AppResult<Json<Vec<SitePageLink>>> {
        Ok(Json(controller.pages_service.list()))
    }

    /// GET /api/pages/{slug} - one static informational page
    pub async fn get_page(
        State(controller): State<Arc<PagesController>>,
        Path(slug): Path<String>,
    ) -> AppResult<Json<SitePage>> {
        let page = controller.pages_service.get(&slug)?;
        Ok(Json(page))
    }
}
