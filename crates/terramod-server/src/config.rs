//! Server configuration management

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use terramod_registry::query;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Page size when a request supplies no usable limit
    pub default_page_limit: usize,

    /// Store fetch cap for latest-version aggregation
    pub version_fetch_cap: usize,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
            default_page_limit: std::env::var("DEFAULT_PAGE_LIMIT")
                .unwrap_or_else(|_| query::DEFAULT_LIST_LIMIT.to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid DEFAULT_PAGE_LIMIT value".to_string()))?,
            version_fetch_cap: std::env::var("VERSION_FETCH_CAP")
                .unwrap_or_else(|_| query::DEFAULT_VERSION_FETCH_CAP.to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid VERSION_FETCH_CAP value".to_string()))?,
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_page_limit: query::DEFAULT_LIST_LIMIT,
            version_fetch_cap: query::DEFAULT_VERSION_FETCH_CAP,
            cors_origins: vec!["*".to_string()],
        }
    }
}
