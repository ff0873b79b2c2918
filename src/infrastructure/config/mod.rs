use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Content API
    pub content_api_url: String,
    pub content_api_token: Option<String>,
    pub content_transport: ContentTransport,
    pub page_size: usize,
    // Email relay
    pub email_api_url: String,
    pub email_service_id: String,
    pub email_template_id: String,
    pub email_public_key: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Which integration shape the content backend is spoken with.
/// Handlers never see this; it only selects the repository impl at startup.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContentTransport {
    Rest,
    Graphql,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            content_api_url: env::var("CONTENT_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            content_api_token: env::var("CONTENT_API_TOKEN").ok(),
            content_transport: env::var("CONTENT_API_TRANSPORT")
                .unwrap_or_else(|_| "rest".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "graphql" => ContentTransport::Graphql,
                    _ => ContentTransport::Rest,
                })?,
            page_size: env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "6".to_string())
                .parse::<usize>()?
                .max(1),
            email_api_url: env::var("EMAIL_API_URL")
                .unwrap_or_else(|_| "https://api.emailjs.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            email_service_id: env::var("EMAIL_SERVICE_ID")?,
            email_template_id: env::var("EMAIL_TEMPLATE_ID")?,
            email_public_key: env::var("EMAIL_PUBLIC_KEY")?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
