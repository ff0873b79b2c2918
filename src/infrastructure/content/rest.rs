//! Query-string transport for the content backend.

use super::record::{CategoryRecord, PostRecord};
use super::ContentRepository;
use crate::domain::blog::Post;
use crate::domain::category::Category;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::Deserialize;

/// Responses arrive wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

pub struct RestContentRepository {
    base_url: String,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl RestContentRepository {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url,
            token,
            http_client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let mut request = self.http_client.get(url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::UpstreamFetch(format!("content API unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamFetch(format!(
                "content API returned {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::UpstreamFetch(format!("unexpected content shape: {}", e)))
    }
}

#[async_trait]
impl ContentRepository for RestContentRepository {
    async fn fetch_posts(&self) -> AppResult<Vec<Post>> {
        let url = format!("{}/api/blogs?populate=*", self.base_url);
        let envelope: Envelope<Vec<PostRecord>> = self.get_json(&url).await?;

        Ok(envelope
            .data
            .into_iter()
            .map(|record| record.into_post(&self.base_url))
            .collect())
    }

    async fn fetch_post_by_slug(&self, slug: &str) -> AppResult<Post> {
        let url = format!(
            "{}/api/blogs?filters[slug][$eq]={}&populate=*",
            self.base_url,
            urlencoding::encode(slug)
        );
        let envelope: Envelope<Vec<PostRecord>> = self.get_json(&url).await?;

        envelope
            .data
            .into_iter()
            .next()
            .map(|record| record.into_post(&self.base_url))
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    async fn fetch_categories(&self) -> AppResult<Vec<Category>> {
        let url = format!("{}/api/categories", self.base_url);
        let envelope: Envelope<Vec<CategoryRecord>> = self.get_json(&url).await?;

        Ok(envelope
            .data
            .into_iter()
            .map(CategoryRecord::into_category)
            .collect())
    }
}
