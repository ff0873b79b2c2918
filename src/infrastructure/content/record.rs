//! Wire records shared by both content transports.
//!
//! The REST and GraphQL shapes of the backend deliver the same flat record;
//! only the envelope differs. Mapping to the domain drops the backend's
//! opaque numeric/document ids - the slug is the canonical identifier.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::blog::{Author, CoverImage, Post};
use crate::domain::category::Category;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub cover: Option<ImageRecord>,
    /// The backend names the relation field in the singular.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub author: Option<AuthorRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ImageRecord {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl PostRecord {
    /// Map to the domain model. `asset_base` absolutizes relative cover
    /// URLs, as the backend serves uploads from its own origin.
    pub fn into_post(self, asset_base: &str) -> Post {
        Post {
            slug: self.slug,
            title: self.title,
            description: self.description.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            cover: self.cover.map(|c| CoverImage {
                url: absolute_asset_url(asset_base, &c.url),
            }),
            categories: self
                .categories
                .into_iter()
                .map(CategoryRecord::into_category)
                .collect(),
            author: self.author.map(|a| Author {
                name: a.name,
                email: a.email,
            }),
            created_at: parse_timestamp(self.created_at.as_deref()),
            updated_at: self.updated_at.as_deref().map(|raw| parse_timestamp(Some(raw))),
        }
    }
}

impl CategoryRecord {
    pub fn into_category(self) -> Category {
        Category {
            slug: self.slug,
            name: self.name,
            description: self.description,
        }
    }
}

/// Missing or malformed timestamps map to the Unix epoch, pushing the post
/// to the end of the recency order instead of failing the whole fetch.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn absolute_asset_url(base: &str, url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{}{}", base, url)
    }
}
