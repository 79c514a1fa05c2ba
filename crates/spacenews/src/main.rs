#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod client;
mod config;
mod driver;
mod error;
mod news;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Read the latest spaceflight news from the Spaceflight News API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Spaceflight News API base URL (overrides SPACENEWS_API_BASE)
    #[clap(long, global = true)]
    api_base: Option<String>,

    /// Articles requested per page (overrides SPACENEWS_PAGE_SIZE)
    #[clap(long, global = true)]
    page_size: Option<usize>,

    /// Whether to display additional information.
    #[clap(long, env = "SPACENEWS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Resolve the API configuration from the environment and CLI overrides
    pub fn api_config(&self) -> Result<config::ApiConfig> {
        config::ApiConfig::from_env()?
            .with_overrides(self.api_base.clone(), self.page_size)
            .validate()
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List the latest articles, one page at a time
    List(crate::news::list::ListOptions),

    /// Search articles by free text
    Search(crate::news::search::SearchOptions),

    /// Read a single article
    Read(crate::news::read::ReadOptions),

    /// Browse articles interactively
    Browse(crate::news::browse::BrowseOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::news::list::run(options, app.global).await,
        SubCommands::Search(options) => crate::news::search::run(options, app.global).await,
        SubCommands::Read(options) => crate::news::read::run(options, app.global).await,
        SubCommands::Browse(options) => crate::news::browse::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
