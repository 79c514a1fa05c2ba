//! Request shaping for the Spaceflight News API
//!
//! Pure functions that turn the three logical read operations into request
//! URLs. The shell only sends what these functions build.

use serde::Serialize;

/// Default Spaceflight News API base URL
pub const DEFAULT_API_BASE: &str = "https://api.spaceflightnewsapi.net/v4";

/// Default number of articles requested per page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// A logical read operation against the remote article source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum ArticleQuery {
    /// One page of articles in the source's default order
    List { limit: usize, offset: usize },
    /// Articles matching a free-text query
    Search { query: String, limit: usize },
    /// A single article by identifier
    Get { id: String },
}

impl ArticleQuery {
    /// Build the full request URL against `base`
    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            ArticleQuery::List { limit, offset } => {
                format!("{base}/articles/?limit={limit}&offset={offset}")
            }
            ArticleQuery::Search { query, limit } => {
                format!(
                    "{base}/articles/?search={}&limit={limit}",
                    urlencoding::encode(query)
                )
            }
            ArticleQuery::Get { id } => {
                format!("{base}/articles/{}/", urlencoding::encode(id.trim()))
            }
        }
    }
}

/// Offset of the zero-based `page_index` for pages of `page_size` articles
///
/// Returns `None` when the offset does not fit in a `usize`.
pub fn page_offset(page_index: usize, page_size: usize) -> Option<usize> {
    page_index.checked_mul(page_size)
}
