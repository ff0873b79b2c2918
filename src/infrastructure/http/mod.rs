pub mod request_id;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    blog::BlogController, category::CategoryController, contact::ContactController, health,
    pages::PagesController, search::SearchController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::content::ContentRepository;
use self::request_id::request_id_middleware;

/// Assemble the application router. Also used by the end-to-end tests so
/// they exercise exactly the routes the binary serves.
pub fn build_router(
    content_repo: Arc<dyn ContentRepository>,
    blog_controller: Arc<BlogController>,
    search_controller: Arc<SearchController>,
    category_controller: Arc<CategoryController>,
    pages_controller: Arc<PagesController>,
    contact_controller: Arc<ContactController>,
) -> Router {
    // Blog listing and reader views
    let blog_routes = Router::new()
        .route("/api/blogs", get(BlogController::list_posts))
        .route("/api/blogs/:slug", get(BlogController::get_post))
        .with_state(blog_controller);

    // Search view
    let search_routes = Router::new()
        .route("/api/search", get(SearchController::search))
        .with_state(search_controller);

    // Category views
    let category_routes = Router::new()
        .route("/api/categories", get(CategoryController::list_categories))
        .route(
            "/api/categories/:slug",
            get(CategoryController::get_category),
        )
        .with_state(category_controller);

    // Static informational pages
    let pages_routes = Router::new()
        .route("/api/pages", get(PagesController::list_pages))
        .route("/api/pages/:slug", get(PagesController::get_page))
        .with_state(pages_controller);

    // Contact form submission
    let contact_routes = Router::new()
        .route("/api/contact", axum::routing::post(ContactController::submit))
        .with_state(contact_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(content_repo)
        .merge(blog_routes)
        .merge(search_routes)
        .merge(category_routes)
        .merge(pages_routes)
        .merge(contact_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    content_repo: Arc<dyn ContentRepository>,
    blog_controller: Arc<BlogController>,
    search_controller: Arc<SearchController>,
    category_controller: Arc<CategoryController>,
    pages_controller: Arc<PagesController>,
    contact_controller: Arc<ContactController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(
        content_repo,
        blog_controller,
        search_controller,
        category_controller,
        pages_controller,
        contact_controller,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
