pub mod error;
pub mod model;
pub mod service;

pub use error::CategoryServiceError;
pub use model::Category;
pub use service::{CategoryService, CategoryServiceApi};

use serde::{Deserialize, Serialize};

use crate::domain::blog::{PaginationMeta, PostSummary};

/// Response for category endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            slug: category.slug,
            name: category.name,
            description: category.description,
        }
    }
}

/// A category plus one page of its posts
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPageResponse {
    pub category: CategoryResponse,
    pub posts: Vec<PostSummary>,
    pub pagination: PaginationMeta,
}
