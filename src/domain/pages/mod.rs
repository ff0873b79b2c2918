pub mod error;
pub mod service;

pub use error::PagesServiceError;
pub use service::{PagesService, PagesServiceApi};

use serde::{Deserialize, Serialize};

/// A static informational page served from the in-process registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitePage {
    pub slug: String,
    pub title: String,
    pub body: Vec<String>,
}

/// Slug + title only, for navigation menus
#[derive(Debug, Serialize, Deserialize)]
pub struct SitePageLink {
    pub slug: String,
    pub title: String,
}

impl From<&SitePage> for SitePageLink {
    fn from(page: &SitePage) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
        }
    }
}
