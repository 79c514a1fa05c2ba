use crate::prelude::*;
use spacenews_core::query::{DEFAULT_API_BASE, DEFAULT_PAGE_SIZE};

/// Spaceflight News API configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    /// Uses SPACENEWS_API_BASE with default fallback
    /// Uses SPACENEWS_PAGE_SIZE with default fallback
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("SPACENEWS_API_BASE") {
            config.base_url = base_url;
        }

        if let Some(raw) = lookup("SPACENEWS_PAGE_SIZE") {
            config.page_size = raw.trim().parse::<usize>().map_err(|_| {
                Error::Config(f!("SPACENEWS_PAGE_SIZE must be a positive integer, got {raw:?}"))
            })?;
        }

        Ok(config)
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>, page_size: Option<usize>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(size) = page_size {
            self.page_size = size;
        }
        self
    }

    /// Reject values the client cannot work with
    pub fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(Error::Config("page size must be at least 1".to_string()).into());
        }

        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(f!(
                "API base URL must start with http:// or https://, got {:?}",
                self.base_url
            ))
            .into());
        }

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            page_size: self.page_size,
        })
    }
}
