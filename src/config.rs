use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        // The storefront pages expect the local API on port 5000.
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse()?,
            Err(_) => 5000,
        };
        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
