//! Detail view state machine
//!
//! Same shape as [`crate::list_state`]: a state value, a pure transition and
//! a request handed back to the caller. Opening an identifier always starts a
//! new load; previously viewed articles are not cached.

use serde::Serialize;

use crate::articles::{build_article_output, Article, ArticleOutput};
use crate::error::FetchError;
use crate::list_state::{Phase, Ticket};
use crate::query::ArticleQuery;

/// Display phase of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Idle,
    Loading,
    Loaded(Box<Article>),
    Error(String),
    /// No identifier was supplied; nothing is requested
    NotFound,
}

/// Input to the detail state machine
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    /// The view was pointed at an identifier (or at nothing)
    Open(Option<String>),
    RetryRequested,
    ArticleLoaded {
        ticket: Ticket,
        result: Result<Article, FetchError>,
    },
}

/// Side effect requested by a detail transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub ticket: Ticket,
    pub query: ArticleQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: Option<String>,
    pub phase: DetailPhase,
    pending: Option<Ticket>,
    next_ticket: Ticket,
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            id: None,
            phase: DetailPhase::Idle,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn article(&self) -> Option<&Article> {
        match &self.phase {
            DetailPhase::Loaded(article) => Some(article.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DetailPhase::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Loading
    }

    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn update(mut self, event: DetailEvent) -> (Self, Option<DetailRequest>) {
        match event {
            DetailEvent::Open(id) => {
                let id = id
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty());
                self.id = id;
                match self.id.clone() {
                    Some(id) => {
                        let request = self.issue(id);
                        (self, Some(request))
                    }
                    None => {
                        self.pending = None;
                        self.phase = DetailPhase::NotFound;
                        (self, None)
                    }
                }
            }
            DetailEvent::RetryRequested => match self.id.clone() {
                Some(id) if !self.is_loading() => {
                    let request = self.issue(id);
                    (self, Some(request))
                }
                _ => (self, None),
            },
            DetailEvent::ArticleLoaded { ticket, result } => {
                if self.pending != Some(ticket) {
                    return (self, None);
                }
                self.pending = None;
                self.phase = match result {
                    Ok(article) => DetailPhase::Loaded(Box::new(article)),
                    Err(err) => DetailPhase::Error(err.user_message()),
                };
                (self, None)
            }
        }
    }

    fn issue(&mut self, id: String) -> DetailRequest {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.phase = DetailPhase::Loading;
        DetailRequest {
            ticket,
            query: ArticleQuery::Get { id },
        }
    }
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of the detail view
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DetailOutput {
    pub id: Option<String>,
    pub status: Phase,
    pub not_found: bool,
    pub error: Option<String>,
    pub article: Option<ArticleOutput>,
}

pub fn build_detail_output(view: &DetailView) -> DetailOutput {
    let status = match view.phase {
        DetailPhase::Idle => Phase::Idle,
        DetailPhase::Loading => Phase::Loading,
        DetailPhase::Loaded(_) | DetailPhase::NotFound => Phase::Loaded,
        DetailPhase::Error(_) => Phase::Error,
    };

    DetailOutput {
        id: view.id.clone(),
        status,
        not_found: view.phase == DetailPhase::NotFound,
        error: view.error().map(str::to_string),
        article: view.article().map(build_article_output),
    }
}
