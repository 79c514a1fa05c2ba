use crate::config::ApiConfig;
use crate::prelude::*;
use serde::de::DeserializeOwned;
use spacenews_core::articles::{Article, PageResult};
use spacenews_core::error::FetchError;
use spacenews_core::query::ArticleQuery;

/// Read operations the view drivers need from the remote article source
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    async fn list_articles(&self, limit: usize, offset: usize) -> Result<PageResult, FetchError>;

    async fn search_articles(&self, query: &str, limit: usize) -> Result<PageResult, FetchError>;

    async fn get_article(&self, id: &str) -> Result<Article, FetchError>;
}

/// HTTP client for the Spaceflight News API
#[derive(Debug, Clone)]
pub struct ArticleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArticleClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("spacenews/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_json<T: DeserializeOwned>(&self, query: &ArticleQuery) -> Result<T, FetchError> {
        let url = query.url(&self.base_url);
        log::debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(|e| {
            log::warn!("Request to {url} failed: {e}");
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Request to {url} returned HTTP {status}");
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("Failed to decode response from {url}: {e}");
            FetchError::Decode(e.to_string())
        })
    }
}

impl ArticleSource for ArticleClient {
    async fn list_articles(&self, limit: usize, offset: usize) -> Result<PageResult, FetchError> {
        self.fetch_json(&ArticleQuery::List { limit, offset }).await
    }

    async fn search_articles(&self, query: &str, limit: usize) -> Result<PageResult, FetchError> {
        if query.trim().is_empty() {
            return Err(FetchError::InvalidRequest(
                "search query must not be empty".to_string(),
            ));
        }

        self.fetch_json(&ArticleQuery::Search {
            query: query.to_string(),
            limit,
        })
        .await
    }

    async fn get_article(&self, id: &str) -> Result<Article, FetchError> {
        if id.trim().is_empty() {
            return Err(FetchError::InvalidRequest(
                "article id must not be empty".to_string(),
            ));
        }

        self.fetch_json(&ArticleQuery::Get { id: id.to_string() })
            .await
    }
}
