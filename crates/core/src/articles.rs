use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Spaceflight News article from API
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    pub news_site: String,
    #[serde(default)]
    pub summary: String,
    pub published_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub launches: Vec<Launch>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Article author. Authors carry no identifier, two authors are the same when
/// every field matches.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub socials: Option<Socials>,
}

/// Social links of an author.
///
/// Older payloads carry a single link string, current ones an object of
/// optional profile URLs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Socials {
    Link(String),
    Profiles(SocialProfiles),
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SocialProfiles {
    pub x: Option<String>,
    pub youtube: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub mastodon: Option<String>,
    pub bluesky: Option<String>,
}

impl Socials {
    /// All non-empty links, in a stable order
    pub fn links(&self) -> Vec<&str> {
        match self {
            Socials::Link(link) if link.trim().is_empty() => Vec::new(),
            Socials::Link(link) => vec![link.as_str()],
            Socials::Profiles(p) => [
                &p.x,
                &p.youtube,
                &p.instagram,
                &p.linkedin,
                &p.mastodon,
                &p.bluesky,
            ]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|link| !link.trim().is_empty())
            .collect(),
        }
    }
}

/// Launch related to an article
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Launch {
    #[serde(deserialize_with = "string_or_number")]
    pub launch_id: String,
    pub provider: String,
}

/// Event related to an article
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Event {
    #[serde(deserialize_with = "string_or_number")]
    pub event_id: String,
    pub provider: String,
}

/// One page of list or search results
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PageResult {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Article>,
}

impl PageResult {
    /// Whether the remote source advertises a further page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

// Launch ids are UUID strings, event ids are integers; both are opaque to us.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Compact article representation used by list output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArticleCard {
    pub id: u64,
    pub title: String,
    pub news_site: String,
    pub published: String,
    pub featured: bool,
    pub summary: String,
    pub url: String,
}

/// Full article representation used by detail output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArticleOutput {
    pub id: u64,
    pub title: String,
    pub news_site: String,
    pub published: String,
    pub updated: String,
    pub featured: bool,
    pub authors: Vec<String>,
    /// Social links of every author, deduplicated, in author order
    pub author_links: Vec<String>,
    pub summary: String,
    pub url: String,
    pub image_url: String,
    pub launches: Vec<Launch>,
    pub events: Vec<Event>,
}

/// Format an ISO-8601 timestamp for display.
///
/// Unparseable input is returned untouched; a bad date never fails a view.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Truncate text to at most `max_chars` characters, appending an ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Maximum summary length shown on list cards
pub const CARD_SUMMARY_CHARS: usize = 150;

/// Transform articles into list cards
pub fn transform_articles(articles: &[Article]) -> Vec<ArticleCard> {
    articles
        .iter()
        .map(|article| ArticleCard {
            id: article.id,
            title: article.title.clone(),
            news_site: article.news_site.clone(),
            published: format_timestamp(&article.published_at),
            featured: article.featured,
            summary: truncate_text(&article.summary, CARD_SUMMARY_CHARS),
            url: article.url.clone(),
        })
        .collect()
}

fn author_links(authors: &[Author]) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for link in authors
        .iter()
        .filter_map(|author| author.socials.as_ref())
        .flat_map(Socials::links)
    {
        if !links.iter().any(|seen| seen == link) {
            links.push(link.to_string());
        }
    }
    links
}

/// Transform a single article into its detail output
pub fn build_article_output(article: &Article) -> ArticleOutput {
    ArticleOutput {
        id: article.id,
        title: article.title.clone(),
        news_site: article.news_site.clone(),
        published: format_timestamp(&article.published_at),
        updated: format_timestamp(&article.updated_at),
        featured: article.featured,
        authors: article.authors.iter().map(|a| a.name.clone()).collect(),
        author_links: author_links(&article.authors),
        summary: article.summary.trim().to_string(),
        url: article.url.clone(),
        image_url: article.image_url.clone(),
        launches: article.launches.clone(),
        events: article.events.clone(),
    }
}
