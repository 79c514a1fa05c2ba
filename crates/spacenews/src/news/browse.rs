use crate::client::ArticleSource;
use crate::driver::{drive_detail, drive_list};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use spacenews_core::articles::{build_article_output, truncate_text};
use spacenews_core::detail_state::{DetailEvent, DetailPhase, DetailView};
use spacenews_core::list_state::{build_list_output, ListEvent, ListView, Phase};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::extract_article_id;
use super::read::format_article_text;

const TITLE_COLUMN_CHARS: usize = 60;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BrowseOptions {
    /// Start with a search instead of the latest articles
    #[arg(short, long)]
    pub query: Option<String>,
}

/// A line typed at the browse prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    More,
    Search(String),
    Reset,
    Retry,
    /// One-based position in the current list
    Open(usize),
    Read(String),
    Back,
    List,
    Help,
    Quit,
}

/// What the prompt loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>> {
    let words = shlex::split(line).ok_or_eyre("Unbalanced quotes in command")?;
    let Some((head, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (head.to_lowercase().as_str(), rest) {
        ("more" | "m" | "next", []) => BrowseCommand::More,
        ("search" | "s" | "/", [_, ..]) => BrowseCommand::Search(rest.join(" ")),
        ("search" | "s" | "/", []) => return Err(eyre!("Usage: search <query>")),
        ("reset" | "clear", []) => BrowseCommand::Reset,
        ("retry" | "r", []) => BrowseCommand::Retry,
        ("open" | "o", [position]) => BrowseCommand::Open(
            position
                .parse()
                .map_err(|_| eyre!("Expected a list position, got '{}'", position))?,
        ),
        ("open" | "o", _) => return Err(eyre!("Usage: open <n>")),
        ("read", [article]) => BrowseCommand::Read(extract_article_id(article)?),
        ("read", _) => return Err(eyre!("Usage: read <id|url>")),
        ("back" | "b", []) => BrowseCommand::Back,
        ("list" | "ls", []) => BrowseCommand::List,
        ("help" | "h" | "?", _) => BrowseCommand::Help,
        ("quit" | "q" | "exit", _) => BrowseCommand::Quit,
        (other, _) => {
            return Err(eyre!(
                "Unknown command '{}'. Type 'help' for the list of commands.",
                other
            ))
        }
    };

    Ok(Some(command))
}

/// Interactive session over one list view and an optional open article
#[derive(Debug, Clone)]
pub struct Browser {
    pub list: ListView,
    pub detail: Option<DetailView>,
}

impl Browser {
    pub fn new(page_size: usize) -> Self {
        Self {
            list: ListView::new(page_size),
            detail: None,
        }
    }

    async fn apply_list<S: ArticleSource>(&mut self, source: &S, event: ListEvent) {
        let view = std::mem::take(&mut self.list);
        self.list = drive_list(source, view, event).await;
    }

    async fn apply_detail<S: ArticleSource>(
        &mut self,
        source: &S,
        view: DetailView,
        event: DetailEvent,
    ) {
        self.detail = Some(drive_detail(source, view, event).await);
    }

    /// Load the first screen: either the latest articles or a search
    pub async fn start<S: ArticleSource>(&mut self, source: &S, query: Option<String>) {
        let event = match query {
            Some(query) => ListEvent::SearchSubmitted(query),
            None => ListEvent::InitialMount,
        };
        self.apply_list(source, event).await;
    }

    pub async fn handle<S: ArticleSource>(
        &mut self,
        source: &S,
        command: BrowseCommand,
    ) -> Result<Flow> {
        match command {
            BrowseCommand::More => {
                if !self.list.can_load_more() {
                    return Err(eyre!(self.load_more_unavailable()));
                }
                self.detail = None;
                self.apply_list(source, ListEvent::LoadMoreRequested).await;
            }
            BrowseCommand::Search(query) => {
                self.detail = None;
                self.apply_list(source, ListEvent::SearchSubmitted(query))
                    .await;
            }
            BrowseCommand::Reset => {
                self.detail = None;
                self.apply_list(source, ListEvent::SearchReset).await;
            }
            BrowseCommand::Retry => match self.detail.take() {
                Some(view) => {
                    self.apply_detail(source, view, DetailEvent::RetryRequested)
                        .await
                }
                None if self.list.can_retry() => {
                    self.apply_list(source, ListEvent::RetryRequested).await
                }
                None => return Err(eyre!("Nothing to retry")),
            },
            BrowseCommand::Open(position) => {
                let article = position
                    .checked_sub(1)
                    .and_then(|idx| self.list.articles.get(idx))
                    .ok_or_else(|| {
                        eyre!(
                            "No article at position {}. The list shows {} articles.",
                            position,
                            self.list.articles.len()
                        )
                    })?;
                let event = DetailEvent::Open(Some(article.id.to_string()));
                self.apply_detail(source, DetailView::new(), event).await;
            }
            BrowseCommand::Read(id) => {
                self.apply_detail(source, DetailView::new(), DetailEvent::Open(Some(id)))
                    .await;
            }
            BrowseCommand::Back | BrowseCommand::List => self.detail = None,
            BrowseCommand::Help => return Ok(Flow::Help),
            BrowseCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Render)
    }

    fn load_more_unavailable(&self) -> &'static str {
        if self.list.is_loading() {
            "Articles are still loading."
        } else if self.list.phase == Phase::Error {
            "The last request failed. Type 'retry' to try again."
        } else if self.list.search_active {
            "Search results are not paginated. Type 'reset' to go back to the latest articles."
        } else {
            "There are no more articles to load."
        }
    }

    /// Render whichever view is in front
    pub fn render(&self) -> String {
        match &self.detail {
            Some(detail) => render_detail(detail),
            None => render_list(&self.list),
        }
    }
}

fn render_list(view: &ListView) -> String {
    let output = build_list_output(view);
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    match &output.search_query {
        Some(query) => result.push_str(&format!(
            "{} {} - {} articles found\n",
            "Results for".bright_cyan().bold(),
            format!("\"{query}\"").bright_cyan().bold(),
            output.articles.len()
        )),
        None => result.push_str(&format!(
            "{}\n",
            "SPACEFLIGHT NEWS".bright_cyan().bold()
        )),
    }
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if let Some(error) = &output.error {
        result.push_str(&format!("\n{} {}\n", "Error!".red().bold(), error.red()));
    }

    if !output.articles.is_empty() {
        let mut table = new_table();
        table.add_row(prettytable::row!["#", "Title", "Source", "Published"]);
        for (idx, card) in output.articles.iter().enumerate() {
            let title = if card.featured {
                f!("* {}", card.title)
            } else {
                card.title.clone()
            };
            table.add_row(prettytable::row![
                idx + 1,
                truncate_text(&title, TITLE_COLUMN_CHARS),
                &card.news_site,
                &card.published
            ]);
        }
        result.push('\n');
        result.push_str(&table.to_string());
    }

    match output.status {
        Phase::Loading => {
            result.push_str(&format!("\n{}\n", "Loading articles...".bright_black()));
        }
        Phase::Loaded if output.articles.is_empty() => {
            result.push_str(&format!("\n{}\n", "No articles found.".yellow()));
        }
        Phase::Loaded if output.search_query.is_none() => {
            result.push_str(&format!(
                "\n{} {} {} {} {}\n",
                "Showing".bright_white(),
                output.pagination.loaded.to_string().bright_cyan().bold(),
                "of".bright_white(),
                output.pagination.total_count.to_string().bright_cyan().bold(),
                f!("({} per page)", view.page_size()).bright_black()
            ));
            if !output.pagination.has_more {
                result.push_str(&format!(
                    "{}\n",
                    "There are no more articles to load.".bright_black()
                ));
            }
        }
        _ => {}
    }

    let mut hints = Vec::new();
    if view.can_load_more() {
        hints.push("more");
    }
    if view.can_retry() {
        hints.push("retry");
    }
    if view.search_active {
        hints.push("reset");
    }
    if !view.articles.is_empty() {
        hints.push("open <n>");
    }
    hints.extend(["search <query>", "help", "quit"]);
    result.push_str(&format!(
        "\n{} {}\n",
        "Commands:".bright_white().bold(),
        hints.join(" | ").cyan()
    ));

    result
}

fn render_detail(view: &DetailView) -> String {
    let mut result = match &view.phase {
        DetailPhase::Loaded(article) => format_article_text(&build_article_output(article)),
        DetailPhase::Loading | DetailPhase::Idle => {
            format!("\n{}\n", "Loading article...".bright_black())
        }
        DetailPhase::NotFound => format!("\n{}\n", "Article not found.".yellow()),
        DetailPhase::Error(message) => format!(
            "\n{} {}\n{}\n",
            "Error!".red().bold(),
            message.red(),
            "Type 'retry' to try again.".bright_black()
        ),
    };

    result.push_str(&format!(
        "{} {}\n",
        "Commands:".bright_white().bold(),
        "back | retry | read <id> | help | quit".cyan()
    ));
    result
}

fn help_text() -> String {
    let mut table = new_table();
    table.add_row(prettytable::row!["more", "Load the next page of articles"]);
    table.add_row(prettytable::row!["search <query>", "Search articles by free text"]);
    table.add_row(prettytable::row!["reset", "Clear the search and show the latest articles"]);
    table.add_row(prettytable::row!["retry", "Repeat the last failed request"]);
    table.add_row(prettytable::row!["open <n>", "Open the article at position n"]);
    table.add_row(prettytable::row!["read <id|url>", "Open an article by ID or API URL"]);
    table.add_row(prettytable::row!["back, list", "Return to the article list"]);
    table.add_row(prettytable::row!["help", "Show this help"]);
    table.add_row(prettytable::row!["quit", "Leave the browser"]);

    f!("\n{}\n{}", "COMMANDS".bright_yellow().bold(), table)
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    let (config, client) = super::connect(&global)?;
    let mut browser = Browser::new(config.page_size);

    browser.start(&client, options.query).await;
    print!("{}", browser.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", "spacenews>".bright_cyan().bold());
        std::io::stdout()
            .flush()
            .wrap_err("Failed to flush the prompt")?;

        let Some(line) = lines
            .next_line()
            .await
            .wrap_err("Failed to read a command from stdin")?
        else {
            println!();
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                continue;
            }
        };

        if global.verbose {
            eprintln!("Command: {:?}", command);
        }

        match browser.handle(&client, command).await {
            Ok(Flow::Render) => print!("{}", browser.render()),
            Ok(Flow::Help) => print!("{}", help_text()),
            Ok(Flow::Quit) => break,
            Err(err) => eprintln!("{}", err.to_string().yellow()),
        }
    }

    Ok(())
}
