use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Secret for signing admin JWTs (HS256)
    pub jwt_secret: String,
    /// Base URL for the API (used in logs and generated links)
    pub api_base_url: String,
    /// Default page size for the post feed when the client omits or
    /// sends an unusable `limit`
    pub feed_default_page_size: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-not-for-production".to_string()),
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            feed_default_page_size: env::var("FEED_DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(10),
        }
    }
}
