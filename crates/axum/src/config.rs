use pagewise_core::LimitOffset;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Page size applied when the limit query parameter is absent (default: `20`).
    pub default_page_limit: i64,
    /// Upper clamp on the requested page size (default: `100`).
    pub max_page_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DEFAULT_PAGE_LIMIT`   | `20`                       |
    /// | `MAX_PAGE_LIMIT`       | `100`                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let default_page_limit: i64 = std::env::var("DEFAULT_PAGE_LIMIT")
            .unwrap_or_else(|_| pagewise_core::limit_offset::DEFAULT_LIMIT.to_string())
            .parse()
            .expect("DEFAULT_PAGE_LIMIT must be a valid i64");

        let max_page_limit: i64 = std::env::var("MAX_PAGE_LIMIT")
            .unwrap_or_else(|_| pagewise_core::limit_offset::DEFAULT_MAX_LIMIT.to_string())
            .parse()
            .expect("MAX_PAGE_LIMIT must be a valid i64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_page_limit,
            max_page_limit,
        }
    }

    /// The pagination strategy the server attaches to its router.
    pub fn pagination(&self) -> LimitOffset {
        LimitOffset {
            default_limit: self.default_page_limit,
            maximum_limit: self.max_page_limit,
            ..Default::default()
        }
    }
}
