//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::database::DatabaseConfig;

/// Deployment environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    fn parse(value: Option<String>) -> Self {
        match value.as_deref().map(str::to_lowercase).as_deref() {
            Some("test") => Environment::Test,
            Some("production") | Some("prod") => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Name of the variable holding the database URL in this environment.
    pub fn database_url_var(self) -> &'static str {
        match self {
            Environment::Test => "TEST_DATABASE_URL",
            _ => "DATABASE_URL",
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::parse(lookup("APP_ENV"));

        let database = lookup(environment.database_url_var())
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(100),
                min_connections: lookup("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment,
            database,
        }
    }
}
