//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! the client, rather than read from the environment during request
//! handling.

use std::path::{Path, PathBuf};

use crate::error::{ApiError, ApiResult};

/// Base URL of the hosted service.
///
/// In a production deployment this would vary by environment and be supplied
/// alongside other environment configuration; the service currently runs a
/// single instance.
pub const DEFAULT_BASE_URL: &str = "https://node-api-for-candidates.onrender.com/";

/// Configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    token_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new `ClientConfig`.
    ///
    /// `token_file` is where the session token is persisted between
    /// invocations; with `None` the session lives in memory only.
    pub fn new(base_url: String, token_file: Option<PathBuf>) -> ApiResult<Self> {
        let base_url = base_url.trim().to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidConfig("base URL cannot be empty".into()));
        }
        Ok(Self {
            base_url,
            token_file,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_file(&self) -> Option<&Path> {
        self.token_file.as_deref()
    }

    /// Join an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_file: None,
        }
    }
}
