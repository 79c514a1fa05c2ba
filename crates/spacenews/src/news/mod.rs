use crate::client::ArticleClient;
use crate::config::ApiConfig;
use crate::prelude::{eprintln, *};
use regex::Regex;

pub mod browse;
pub mod list;
pub mod read;
pub mod search;

/// Resolve configuration and build the API client shared by every command
pub fn connect(global: &crate::Global) -> Result<(ApiConfig, ArticleClient)> {
    let config = global.api_config()?;
    let client = ArticleClient::new(&config)?;

    if global.verbose {
        eprintln!("Spaceflight News API Base: {}", client.base_url());
        eprintln!("Page size: {}", config.page_size);
        eprintln!();
    }

    Ok((config, client))
}

/// Accept either a numeric article ID or an article URL of the API
pub fn extract_article_id(input: &str) -> Result<String> {
    let input = input.trim();

    // Try to parse as number first
    if input.parse::<u64>().is_ok() {
        return Ok(input.to_string());
    }

    // Try to extract from URL
    let re = Regex::new(r"/articles/(\d+)/?(?:[?#].*)?$")
        .map_err(|e| eyre!("Invalid article URL pattern: {}", e))?;
    if let Some(id_match) = re.captures(input).and_then(|caps| caps.get(1)) {
        return Ok(id_match.as_str().to_string());
    }

    Err(Error::InvalidArticleId(input.to_string()).into())
}
