use crate::client::ArticleSource;
use crate::driver::drive_list;
use crate::prelude::{eprintln, println, *};
use spacenews_core::list_state::{build_list_output, ListEvent, ListOutput, ListView, Phase};

use super::list::{format_list_json, format_list_text};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SearchOptions {
    /// Free text to search for in titles and summaries
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of results (defaults to the configured page size)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let (config, client) = super::connect(&global)?;
    let limit = options.limit.unwrap_or(config.page_size);
    let query = options.query.join(" ");

    if global.verbose {
        eprintln!("Searching for \"{}\" (up to {} results)...", query, limit);
    }

    let output = search_data(&client, &query, limit).await?;

    if options.json {
        println!("{}", format_list_json(&output)?);
    } else {
        print!("{}", format_list_text(&output));
    }

    Ok(())
}

/// Runs a search through the list view and returns the settled output
///
/// A blank query falls back to the first page of the default listing.
pub async fn search_data<S: ArticleSource>(
    source: &S,
    query: &str,
    limit: usize,
) -> Result<ListOutput> {
    if limit == 0 {
        return Err(eyre!("Limit must be at least 1"));
    }

    let view = drive_list(
        source,
        ListView::new(limit),
        ListEvent::SearchSubmitted(query.to_string()),
    )
    .await;

    if view.phase == Phase::Error {
        let message = view.error.unwrap_or_else(|| "unknown error".to_string());
        return Err(eyre!("Search failed: {}", message));
    }

    Ok(build_list_output(&view))
}
