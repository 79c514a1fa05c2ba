use crate::client::ArticleSource;
use crate::driver::drive_detail;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use spacenews_core::articles::ArticleOutput;
use spacenews_core::detail_state::{build_detail_output, DetailEvent, DetailPhase, DetailView};

use super::extract_article_id;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ReadOptions {
    /// Article ID or API URL (e.g., "24512" or
    /// "https://api.spaceflightnewsapi.net/v4/articles/24512/")
    #[clap(env = "SPACENEWS_ARTICLE")]
    pub article: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ReadOptions, global: crate::Global) -> Result<()> {
    let article_id = extract_article_id(&options.article)?;
    let (_, client) = super::connect(&global)?;

    if global.verbose {
        eprintln!("Fetching article ID: {}", article_id);
    }

    let article = read_article_data(&client, article_id).await?;

    if options.json {
        println!("{}", format_article_json(&article)?);
    } else {
        print!("{}", format_article_text(&article));
    }

    Ok(())
}

/// Loads one article through the detail view and returns its output
pub async fn read_article_data<S: ArticleSource>(source: &S, id: String) -> Result<ArticleOutput> {
    let view = drive_detail(source, DetailView::new(), DetailEvent::Open(Some(id.clone()))).await;

    match &view.phase {
        DetailPhase::Error(message) => Err(eyre!("Failed to read article {}: {}", id, message)),
        DetailPhase::NotFound => Err(eyre!("Article not found")),
        _ => build_detail_output(&view)
            .article
            .ok_or_eyre("The article view settled without an article"),
    }
}

/// Convert article output to JSON string
pub fn format_article_json(article: &ArticleOutput) -> Result<String> {
    serde_json::to_string_pretty(article).wrap_err("JSON serialization failed")
}

/// Convert article output to formatted text with colors
pub fn format_article_text(article: &ArticleOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", article.title.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if article.featured {
        result.push_str(&format!("\n{}\n", "* Featured article".bright_yellow().bold()));
    }

    result.push_str(&format!(
        "\n{}: {}\n",
        "Source".green(),
        article.news_site.bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Published".green(),
        article.published.bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Updated".green(),
        article.updated.bright_white()
    ));
    if !article.authors.is_empty() {
        result.push_str(&format!(
            "{}: {}\n",
            "Authors".green(),
            article.authors.join(", ").bright_white()
        ));
    }
    for link in &article.author_links {
        result.push_str(&format!("  {} {}\n", "-".bright_black(), link.cyan()));
    }
    if !article.launches.is_empty() || !article.events.is_empty() {
        result.push_str(&format!(
            "{}: {} | {}: {}\n",
            "Related launches".green(),
            article.launches.len().to_string().bright_magenta(),
            "Related events".green(),
            article.events.len().to_string().bright_magenta()
        ));
    }

    result.push_str(&format!("\n{}\n", "SUMMARY".bright_yellow().bold()));
    if article.summary.is_empty() {
        result.push_str(&format!("{}\n", "(No summary)".bright_black()));
    } else {
        result.push_str(&format!("{}\n", article.summary));
    }

    result.push_str(&format!("\n{}\n", "READ THE FULL ARTICLE".bright_yellow().bold()));
    result.push_str(&format!("{}\n", article.url.cyan().underline()));

    if !article.launches.is_empty() {
        result.push_str(&format!("\n{}\n", "RELATED LAUNCHES".bright_yellow().bold()));
        for launch in &article.launches {
            result.push_str(&format!(
                "  {} {} ({}: {})\n",
                "-".bright_black(),
                launch.launch_id.bright_white(),
                "Provider".green(),
                launch.provider
            ));
        }
    }

    if !article.events.is_empty() {
        result.push_str(&format!("\n{}\n", "RELATED EVENTS".bright_yellow().bold()));
        for event in &article.events {
            result.push_str(&format!(
                "  {} {} ({}: {})\n",
                "-".bright_black(),
                event.event_id.bright_white(),
                "Provider".green(),
                event.provider
            ));
        }
    }

    result.push_str(&format!("\n{}:\n", "To go back".bright_white().bold()));
    result.push_str(&format!("  {}\n", "spacenews list".cyan()));
    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        format!("spacenews read {} --json", article.id).cyan()
    ));

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::tests::FakeSource;
    use spacenews_core::articles::{Event, Launch};
    use spacenews_core::error::FetchError;

    fn create_test_article() -> ArticleOutput {
        ArticleOutput {
            id: 24512,
            title: "Starship completes fourth test flight".to_string(),
            news_site: "SpaceNews".to_string(),
            published: "2024-06-06 14:48 UTC".to_string(),
            updated: "2024-06-06 15:02 UTC".to_string(),
            featured: true,
            authors: vec!["Jeff Foust".to_string(), "Marcia Smith".to_string()],
            author_links: vec!["https://x.com/spcplcyonline".to_string()],
            summary: "SpaceX's Starship completed its fourth integrated test flight.".to_string(),
            url: "https://spacenews.com/starship-ift4/".to_string(),
            image_url: "https://spacenews.com/ift4.jpg".to_string(),
            launches: vec![Launch {
                launch_id: "b1a4e3b4".to_string(),
                provider: "Launch Library 2".to_string(),
            }],
            events: vec![Event {
                event_id: "812".to_string(),
                provider: "Launch Library 2".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_read_article_data() {
        let source = FakeSource::new(30);
        let article = read_article_data(&source, "12".to_string()).await.unwrap();

        assert_eq!(article.id, 12);
        assert_eq!(article.authors, vec!["Marcia Smith"]);
        assert_eq!(article.published, "2024-03-14 09:00 UTC");
    }

    #[tokio::test]
    async fn test_read_article_data_not_found() {
        let source = FakeSource::new(30);
        let err = read_article_data(&source, "999999".to_string())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("999999"));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_read_article_data_transport_failure() {
        let source = FakeSource::new(30);
        source.fail_next(FetchError::Transport("dns error".to_string()));
        let err = read_article_data(&source, "1".to_string()).await.unwrap_err();

        assert!(err.to_string().contains("Network error: dns error"));
    }

    #[test]
    fn test_format_article_json() {
        let json = format_article_json(&create_test_article()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["id"], 24512);
        assert_eq!(parsed["featured"], true);
        assert_eq!(parsed["authors"][1], "Marcia Smith");
        assert_eq!(parsed["events"][0]["event_id"], "812");
    }

    #[test]
    fn test_format_article_text_structure() {
        let formatted = format_article_text(&create_test_article());

        assert!(formatted.contains("Starship completes fourth test flight"));
        assert!(formatted.contains("Featured article"));
        assert!(formatted.contains("SpaceNews"));
        assert!(formatted.contains("2024-06-06 14:48 UTC"));
        assert!(formatted.contains("Jeff Foust, Marcia Smith"));
        assert!(formatted.contains("https://x.com/spcplcyonline"));
        assert!(formatted.contains("SUMMARY"));
        assert!(formatted.contains("https://spacenews.com/starship-ift4/"));
        assert!(formatted.contains("RELATED LAUNCHES"));
        assert!(formatted.contains("b1a4e3b4"));
        assert!(formatted.contains("RELATED EVENTS"));
        assert!(formatted.contains("spacenews read 24512 --json"));
    }

    #[test]
    fn test_format_article_text_minimal() {
        let mut article = create_test_article();
        article.featured = false;
        article.authors.clear();
        article.author_links.clear();
        article.launches.clear();
        article.events.clear();
        article.summary.clear();

        let formatted = format_article_text(&article);

        assert!(!formatted.contains("Featured"));
        assert!(!formatted.contains("Authors"));
        assert!(!formatted.contains("x.com"));
        assert!(!formatted.contains("RELATED LAUNCHES"));
        assert!(!formatted.contains("RELATED EVENTS"));
        assert!(formatted.contains("(No summary)"));
    }
}
