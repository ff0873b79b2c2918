use super::error::PagesServiceError;
use crate::domain::pages::{SitePage, SitePageLink};
use std::sync::LazyLock;

static PAGES: LazyLock<Vec<SitePage>> = LazyLock::new(|| {
    vec![
        SitePage {
            slug: "about".to_string(),
            title: "About TOM.BLOG".to_string(),
            body: vec![
                "TOM.BLOG is your go-to resource for all things content and web \
                 development. Our mission is to provide practical tutorials, insights, \
                 and tips to help developers build amazing projects."
                    .to_string(),
                "This platform is designed to be a community-driven hub where developers \
                 can share knowledge, explore new techniques, and stay up-to-date with \
                 the latest trends in web development."
                    .to_string(),
                "We hope you enjoy reading our posts and learning from our tutorials. \
                 Feel free to connect with us or explore other pages to discover more."
                    .to_string(),
            ],
        },
        SitePage {
            slug: "contact".to_string(),
            title: "Contact Us".to_string(),
            body: vec![
                "Have a question or want to collaborate? Fill out the form below or \
                 email us directly at hello@tomblog.dev."
                    .to_string(),
                "You can also find us on Twitter, GitHub, and Instagram.".to_string(),
            ],
        },
    ]
});

/// Static pages need no upstream call, so this service is synchronous.
pub struct PagesService;

impl PagesService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PagesService {
    fn default() -> Self {
        Self::new()
    }
}

pub trait PagesServiceApi: Send + Sync {
    fn list(&self) -> Vec<SitePageLink>;
    fn get(&self, slug: &str) -> Result<SitePage, PagesServiceError>;
}

impl PagesServiceApi for PagesService {
    fn list(&self) -> Vec<SitePageLink> {
        PAGES.iter().map(SitePageLink::from).collect()
    }

    fn get(&self, slug: &str) -> Result<SitePage, PagesServiceError> {
        PAGES
            .iter()
            .find(|page| page.slug == slug)
            .cloned()
            .ok_or(PagesServiceError::NotFound)
    }
}
