use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// A blog post as fetched from the content backend.
///
/// The slug is the canonical identifier; opaque backend ids are dropped at
/// the wire boundary. Immutable once fetched - one request's snapshot is
/// discarded when the response is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub cover: Option<CoverImage>,
    pub categories: Vec<Category>,
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
}

impl Post {
    /// Recency key used for ordering: last update wins, otherwise creation.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Name of the first category, shown as the post's badge in listings.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(|c| c.name.as_str())
    }

    pub fn in_category(&self, category_slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == category_slug)
    }
}
