//! GraphQL transport for the content backend.

use super::record::{CategoryRecord, PostRecord};
use super::ContentRepository;
use crate::domain::blog::Post;
use crate::domain::category::Category;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

const BLOGS_QUERY: &str = r#"
query Blogs {
  blogs {
    title
    slug
    description
    content
    createdAt
    updatedAt
    cover { url }
    category { name slug description }
    author { name email }
  }
}"#;

const BLOG_BY_SLUG_QUERY: &str = r#"
query BlogBySlug($slug: String!) {
  blogs(filters: { slug: { eq: $slug } }) {
    title
    slug
    description
    content
    createdAt
    updatedAt
    cover { url }
    category { name slug description }
    author { name email }
  }
}"#;

const CATEGORIES_QUERY: &str = r#"
query Categories {
  categories { name slug description }
}"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BlogsData {
    blogs: Vec<PostRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoriesData {
    categories: Vec<CategoryRecord>,
}

pub struct GraphqlContentRepository {
    base_url: String,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl GraphqlContentRepository {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url,
            token,
            http_client: reqwest::Client::new(),
        }
    }

    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> AppResult<T> {
        let mut request = self
            .http_client
            .post(format!("{}/graphql", self.base_url))
            .json(&json!({ "query": query, "variables": variables }));
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

        let body: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamFetch(format!("unexpected content shape: {}", e)))?;

        if !body.errors.is_empty() {
            let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(AppError::UpstreamFetch(messages.join("; ")));
        }

        body.data
            .ok_or_else(|| AppError::UpstreamFetch("response carried no data".to_string()))
    }
}

#[async_trait]
impl ContentRepository for GraphqlContentRepository {
    async fn fetch_posts(&self) -> AppResult<Vec<Post>> {
        let data: BlogsData = self.execute(BLOGS_QUERY, json!({})).await?;

        Ok(data
            .blogs
            .into_iter()
            .map(|record| record.into_post(&self.base_url))
            .collect())
    }

    async fn fetch_post_by_slug(&self, slug: &str) -> AppResult<Post> {
        let data: BlogsData = self
            .execute(BLOG_BY_SLUG_QUERY, json!({ "slug": slug }))
            .await?;

        data.blogs
            .into_iter()
            .next()
            .map(|record| record.into_post(&self.base_url))
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    async fn fetch_categories(&self) -> AppResult<Vec<Category>> {
        let data: CategoriesData = self.execute(CATEGORIES_QUERY, json!({})).await?;

        Ok(data
            .categories
            .into_iter()
            .map(CategoryRecord::into_category)
            .collect())
    }
}
