use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tomblog_web::controllers::{
    blog::BlogController, category::CategoryController, contact::ContactController,
    pages::PagesController, search::SearchController,
};
use tomblog_web::domain::{
    blog::BlogService, category::CategoryService, contact::ContactService, pages::PagesService,
};
use tomblog_web::infrastructure::config::{Config, ContentTransport, LogFormat};
use tomblog_web::infrastructure::content::{
    ContentRepository, GraphqlContentRepository, RestContentRepository,
};
use tomblog_web::infrastructure::email::EmailJsRelay;
use tomblog_web::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TOM.BLOG web on {}:{} (content transport: {:?})",
        config.host,
        config.port,
        config.content_transport
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate upstream clients
    tracing::info!("Instantiating content repository...");
    let content_repo: Arc<dyn ContentRepository> = match config.content_transport {
        ContentTransport::Rest => Arc::new(RestContentRepository::new(
            config.content_api_url.clone(),
            config.content_api_token.clone(),
        )),
        ContentTransport::Graphql => Arc::new(GraphqlContentRepository::new(
            config.content_api_url.clone(),
            config.content_api_token.clone(),
        )),
    };

    let email_relay = Arc::new(EmailJsRelay::new(
        config.email_api_url.clone(),
        config.email_service_id.clone(),
        config.email_template_id.clone(),
        config.email_public_key.clone(),
    ));

    // 2. Instantiate services (inject clients)
    tracing::info!("Instantiating services...");
    let blog_service = Arc::new(BlogService::new(content_repo.clone(), config.page_size));
    let category_service = Arc::new(CategoryService::new(
        content_repo.clone(),
        config.page_size,
    ));
    let contact_service = Arc::new(ContactService::new(email_relay));
    let pages_service = Arc::new(PagesService::new());

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let blog_controller = Arc::new(BlogController::new(blog_service.clone()));
    let search_controller = Arc::new(SearchController::new(blog_service));
    let category_controller = Arc::new(CategoryController::new(category_service));
    let pages_controller = Arc::new(PagesController::new(pages_service));
    let contact_controller = Arc::new(ContactController::new(contact_service));

    // Start HTTP server with all routes
    start_http_server(
        config,
        content_repo,
        blog_controller,
        search_controller,
        category_controller,
        pages_controller,
        contact_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tomblog_web=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tomblog_web=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
