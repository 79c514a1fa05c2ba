use crate::client::ArticleSource;
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use spacenews_core::articles::ArticleCard;
use spacenews_core::list_state::{build_page_output, total_pages, ListOutput, Phase};
use spacenews_core::query::page_offset;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Number of articles per page (defaults to the configured page size)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let (config, client) = super::connect(&global)?;
    let limit = options.limit.unwrap_or(config.page_size);

    if global.verbose {
        eprintln!("Fetching page {} ({} articles per page)...", options.page, limit);
    }

    let output = list_page_data(&client, limit, options.page).await?;

    if options.json {
        println!("{}", format_list_json(&output)?);
    } else {
        print!("{}", format_list_text(&output));
    }

    Ok(())
}

/// Fetches one page of the default article listing
pub async fn list_page_data<S: ArticleSource>(
    source: &S,
    limit: usize,
    page: usize,
) -> Result<ListOutput> {
    if page == 0 {
        return Err(eyre!("Page numbers start at 1"));
    }
    if limit == 0 {
        return Err(eyre!("Limit must be at least 1"));
    }

    let offset = page_offset(page - 1, limit)
        .ok_or_else(|| eyre!("Page {} is out of range", page))?;
    let result = source
        .list_articles(limit, offset)
        .await
        .map_err(|e| eyre!("Failed to list articles: {}", e))?;

    if page > 1 && result.results.is_empty() {
        return Err(eyre!(
            "Page {} is out of range. Only {} pages available.",
            page,
            total_pages(result.count, limit)
        ));
    }

    Ok(build_page_output(&result, page, limit))
}

/// Convert list output to JSON string
pub fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).wrap_err("JSON serialization failed")
}

fn format_card(position: usize, card: &ArticleCard) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} {}",
        format!("[{position}]").yellow().bold(),
        card.title.white().bold()
    ));
    if card.featured {
        result.push_str(&format!(" {}", "* Featured".bright_yellow()));
    }
    result.push('\n');

    result.push_str(&format!(
        "    {}: {} | {}: {}\n",
        "Source".green(),
        card.news_site.bright_white(),
        "Published".green(),
        card.published.bright_black()
    ));

    if !card.summary.is_empty() {
        result.push_str(&format!("    {}\n", card.summary));
    }

    result.push_str(&format!(
        "    {}: {} | {}: {}\n",
        "ID".green(),
        card.id.to_string().bright_white(),
        "Read".green(),
        format!("spacenews read {}", card.id).cyan()
    ));

    result
}

/// Convert list output to formatted text with colors
pub fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    let title = match &output.search_query {
        Some(_) => "SPACEFLIGHT NEWS SEARCH".to_string(),
        None => {
            let pages = total_pages(pagination.total_count, pagination.page_size);
            format!(
                "SPACEFLIGHT NEWS (Page {} of {})",
                pagination.page_index + 1,
                pages.max(1)
            )
        }
    };
    result.push_str(&format!("{}\n", title.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if let Some(query) = &output.search_query {
        result.push_str(&format!(
            "\n{} {} - {} articles found\n",
            "Results for:".bright_white(),
            format!("\"{query}\"").bright_cyan().bold(),
            output.articles.len()
        ));
    }

    if let Some(error) = &output.error {
        result.push_str(&format!("\n{} {}\n", "Error!".red().bold(), error.red()));
    }

    for (idx, card) in output.articles.iter().enumerate() {
        result.push_str(&format_card(pagination.first_position + idx, card));
    }

    match output.status {
        Phase::Loading => {
            result.push_str(&format!("\n{}\n", "Loading articles...".bright_black()));
        }
        Phase::Loaded if output.articles.is_empty() => {
            result.push_str(&format!("\n{}\n", "No articles found.".yellow()));
        }
        Phase::Loaded if !pagination.has_more => {
            result.push_str(&format!(
                "\n{}\n",
                "There are no more articles to load.".bright_black()
            ));
        }
        _ => {}
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    if output.search_query.is_none() {
        result.push_str(&format!(
            "\n{} {} {} {}\n",
            "Showing".bright_white(),
            pagination.loaded.to_string().bright_cyan().bold(),
            "of".bright_white(),
            format!("{} articles", pagination.total_count)
                .bright_cyan()
                .bold()
        ));
    }

    if let Some(command) = &pagination.next_page_command {
        result.push_str(&format!("\n{}:\n", "To load more".bright_white().bold()));
        result.push_str(&format!("  {}\n", command.cyan()));
    }

    result.push_str(&format!("\n{}:\n", "To read an article".bright_white().bold()));
    result.push_str(&format!("  {}\n", "spacenews read <id>".cyan()));
    if let Some(first) = output.articles.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("spacenews read {}", first.id).cyan()
        ));
    }

    result.push_str(&format!("\n{}:\n", "To search".bright_white().bold()));
    result.push_str(&format!("  {}\n", "spacenews search <query>".cyan()));

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "add --json to any command".cyan()));

    result.push('\n');
    result
}
