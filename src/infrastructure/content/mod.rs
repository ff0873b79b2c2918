pub mod graphql;
pub mod record;
pub mod rest;

pub use graphql::GraphqlContentRepository;
pub use rest::RestContentRepository;

use crate::domain::blog::Post;
use crate::domain::category::Category;
use crate::error::AppResult;
use async_trait::async_trait;

/// Boundary to the external content backend.
///
/// Rendering code only ever sees this trait; whether the backend is spoken
/// to with query strings or GraphQL documents is decided once at startup.
///
/// Implementations make a single attempt per call - no retry, no backoff,
/// and no cross-request cache (each page view re-fetches the full set).
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// The full post set, unordered as delivered by the backend.
    async fn fetch_posts(&self) -> AppResult<Vec<Post>>;

    /// A single post addressed by its slug.
    ///
    /// # Errors
    /// `NotFound` when the backend has no such post; `UpstreamFetch` when the
    /// call rejects or the response has an unexpected shape.
    async fn fetch_post_by_slug(&self, slug: &str) -> AppResult<Post>;

    /// All categories.
    async fn fetch_categories(&self) -> AppResult<Vec<Category>>;
}
