//! List view state machine
//!
//! The list view is an explicit state value plus a pure transition,
//! [`ListView::update`]. A transition never performs I/O: when it needs data it
//! returns a [`ListRequest`] and the caller feeds the outcome back as
//! [`ListEvent::PageLoaded`].
//!
//! Every request carries a ticket. Only the outcome whose ticket matches the
//! pending request is applied, so a late response from a superseded request
//! can never overwrite newer state.

use serde::Serialize;

use crate::articles::{transform_articles, Article, ArticleCard, PageResult};
use crate::error::FetchError;
use crate::query::{page_offset, ArticleQuery};

/// Request identifier handed out by the state machines
pub type Ticket = u64;

/// Display phase of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Input to the list state machine
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// The view was shown for the first time
    InitialMount,
    /// The user asked for the next page
    LoadMoreRequested,
    /// The user submitted the search form
    SearchSubmitted(String),
    /// The user cleared the search
    SearchReset,
    /// The user asked to retry the last failed operation
    RetryRequested,
    /// A request issued by this machine settled
    PageLoaded {
        ticket: Ticket,
        result: Result<PageResult, FetchError>,
    },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub ticket: Ticket,
    pub query: ArticleQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadKind {
    /// First page of the default listing
    Fresh,
    /// Next page of the default listing
    More,
    /// Search results
    Search,
}

#[derive(Debug, Clone, PartialEq)]
struct Operation {
    kind: LoadKind,
    query: ArticleQuery,
}

/// State of the article list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    /// Accumulated articles, in display order
    pub articles: Vec<Article>,
    pub phase: Phase,
    pub error: Option<String>,
    /// Zero-based index of the last page appended
    pub page_index: usize,
    pub has_more: bool,
    pub search_active: bool,
    pub query: String,
    /// Total reported by the remote source for the current listing
    pub total_count: u64,
    page_size: usize,
    pending: Option<(Ticket, Operation)>,
    last_failed: Option<Operation>,
    next_ticket: Ticket,
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            articles: Vec::new(),
            phase: Phase::Idle,
            error: None,
            page_index: 0,
            has_more: false,
            search_active: false,
            query: String::new(),
            total_count: 0,
            page_size: page_size.max(1),
            pending: None,
            last_failed: None,
            next_ticket: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether a `LoadMoreRequested` would issue a request right now
    pub fn can_load_more(&self) -> bool {
        self.phase == Phase::Loaded && self.has_more && !self.search_active
    }

    /// Whether a `RetryRequested` would issue a request right now
    pub fn can_retry(&self) -> bool {
        self.phase == Phase::Error && self.last_failed.is_some()
    }

    /// Loaded without error but nothing to show
    pub fn is_empty_result(&self) -> bool {
        self.phase == Phase::Loaded && self.articles.is_empty()
    }

    /// Ticket of the request currently in flight, if any
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Apply one event and return the new state plus the request to perform
    pub fn update(mut self, event: ListEvent) -> (Self, Option<ListRequest>) {
        match event {
            ListEvent::InitialMount | ListEvent::SearchReset => {
                let request = self.start_fresh();
                (self, Some(request))
            }
            ListEvent::LoadMoreRequested => {
                let next_offset = self
                    .page_index
                    .checked_add(1)
                    .and_then(|next| page_offset(next, self.page_size));
                let offset = match next_offset {
                    Some(offset) if self.can_load_more() => offset,
                    _ => return (self, None),
                };
                let query = ArticleQuery::List {
                    limit: self.page_size,
                    offset,
                };
                let request = self.issue(LoadKind::More, query);
                (self, Some(request))
            }
            ListEvent::SearchSubmitted(raw) => {
                if self.is_loading() {
                    return (self, None);
                }
                let query = raw.trim();
                if query.is_empty() {
                    let request = self.start_fresh();
                    return (self, Some(request));
                }
                self.search_active = true;
                self.query = query.to_string();
                let search = ArticleQuery::Search {
                    query: self.query.clone(),
                    limit: self.page_size,
                };
                let request = self.issue(LoadKind::Search, search);
                (self, Some(request))
            }
            ListEvent::RetryRequested => {
                if self.is_loading() {
                    return (self, None);
                }
                match self.last_failed.clone() {
                    Some(operation) => {
                        let request = self.issue(operation.kind, operation.query);
                        (self, Some(request))
                    }
                    None => (self, None),
                }
            }
            ListEvent::PageLoaded { ticket, result } => {
                self.settle(ticket, result);
                (self, None)
            }
        }
    }

    fn start_fresh(&mut self) -> ListRequest {
        self.search_active = false;
        self.query.clear();
        let query = ArticleQuery::List {
            limit: self.page_size,
            offset: 0,
        };
        self.issue(LoadKind::Fresh, query)
    }

    fn issue(&mut self, kind: LoadKind, query: ArticleQuery) -> ListRequest {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.phase = Phase::Loading;
        self.error = None;
        self.pending = Some((
            ticket,
            Operation {
                kind,
                query: query.clone(),
            },
        ));
        ListRequest { ticket, query }
    }

    fn settle(&mut self, ticket: Ticket, result: Result<PageResult, FetchError>) {
        let operation = match self.pending.take() {
            Some((pending, operation)) if pending == ticket => operation,
            other => {
                // Stale or unsolicited outcome.
                self.pending = other;
                return;
            }
        };
        let appends = operation.kind == LoadKind::More;

        match result {
            Ok(page) => {
                self.phase = Phase::Loaded;
                self.error = None;
                self.last_failed = None;
                self.total_count = page.count;
                self.has_more = operation.kind != LoadKind::Search && page.has_next();
                if appends {
                    self.articles.extend(page.results);
                    self.page_index += 1;
                } else {
                    self.articles = page.results;
                    self.page_index = 0;
                }
            }
            Err(err) => {
                self.phase = Phase::Error;
                self.error = Some(err.user_message());
                if !appends {
                    self.articles.clear();
                    self.page_index = 0;
                    self.has_more = false;
                    self.total_count = 0;
                }
                self.last_failed = Some(operation);
            }
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(crate::query::DEFAULT_PAGE_SIZE)
    }
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListPaginationInfo {
    pub page_index: usize,
    /// One-based position of the first article in `articles`
    pub first_position: usize,
    pub page_size: usize,
    pub total_count: u64,
    pub loaded: usize,
    pub has_more: bool,
    pub next_page_command: Option<String>,
}

/// Serializable snapshot of the list view
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ListOutput {
    pub status: Phase,
    pub search_query: Option<String>,
    pub error: Option<String>,
    pub articles: Vec<ArticleCard>,
    pub pagination: ListPaginationInfo,
}

/// Build the output snapshot of a list view
pub fn build_list_output(view: &ListView) -> ListOutput {
    let next_page_command = if view.can_load_more() {
        Some(format!(
            "spacenews list --page {} --limit {}",
            view.page_index + 2,
            view.page_size
        ))
    } else {
        None
    };

    ListOutput {
        status: view.phase,
        search_query: view.search_active.then(|| view.query.clone()),
        error: view.error.clone(),
        articles: transform_articles(&view.articles),
        pagination: ListPaginationInfo {
            page_index: view.page_index,
            first_position: 1,
            page_size: view.page_size,
            total_count: view.total_count,
            loaded: view.articles.len(),
            has_more: view.has_more,
            next_page_command,
        },
    }
}

/// Build the output of a single page fetched outside a list view
///
/// `page_number` is one-based, as shown to users.
pub fn build_page_output(page: &PageResult, page_number: usize, page_size: usize) -> ListOutput {
    let page_number = page_number.max(1);
    let page_size = page_size.max(1);

    let next_page_command = page.has_next().then(|| {
        format!(
            "spacenews list --page {} --limit {}",
            page_number.saturating_add(1),
            page_size
        )
    });
    let first_position = page_offset(page_number - 1, page_size)
        .map_or(usize::MAX, |offset| offset.saturating_add(1));

    ListOutput {
        status: Phase::Loaded,
        search_query: None,
        error: None,
        articles: transform_articles(&page.results),
        pagination: ListPaginationInfo {
            page_index: page_number - 1,
            first_position,
            page_size,
            total_count: page.count,
            loaded: page.results.len(),
            has_more: page.has_next(),
            next_page_command,
        },
    }
}

/// Number of pages needed to show `total_count` articles
pub fn total_pages(total_count: u64, page_size: usize) -> u64 {
    total_count.div_ceil(page_size.max(1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::fixtures::{articles, page};

    const NEXT: &str = "https://api.spaceflightnewsapi.net/v4/articles/?limit=12&offset=12";

    fn mounted(size: usize, first: PageResult) -> ListView {
        let (view, request) = ListView::new(size).update(ListEvent::InitialMount);
        let request = request.unwrap();
        complete(view, &request, Ok(first))
    }

    fn complete(
        view: ListView,
        request: &ListRequest,
        result: Result<PageResult, FetchError>,
    ) -> ListView {
        let (view, follow_up) = view.update(ListEvent::PageLoaded {
            ticket: request.ticket,
            result,
        });
        assert!(follow_up.is_none());
        view
    }

    fn ids(view: &ListView) -> Vec<u64> {
        view.articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_new_view_is_idle() {
        let view = ListView::new(12);
        assert_eq!(view.phase, Phase::Idle);
        assert!(view.articles.is_empty());
        assert!(!view.can_load_more());
        assert_eq!(view.pending_ticket(), None);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(ListView::new(0).page_size(), 1);
    }

    #[test]
    fn test_initial_mount_requests_first_page() {
        let (view, request) = ListView::new(12).update(ListEvent::InitialMount);
        let request = request.unwrap();

        assert_eq!(view.phase, Phase::Loading);
        assert_eq!(
            request.query,
            ArticleQuery::List {
                limit: 12,
                offset: 0
            }
        );
        assert_eq!(view.pending_ticket(), Some(request.ticket));
    }

    #[test]
    fn test_initial_mount_success() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));

        assert_eq!(view.phase, Phase::Loaded);
        assert_eq!(view.articles.len(), 12);
        assert!(view.has_more);
        assert_eq!(view.page_index, 0);
        assert!(!view.search_active);
        assert_eq!(view.total_count, 30);
        assert_eq!(view.error, None);
        assert_eq!(view.pending_ticket(), None);
    }

    #[test]
    fn test_initial_mount_failure() {
        let (view, request) = ListView::new(12).update(ListEvent::InitialMount);
        let view = complete(
            view,
            &request.unwrap(),
            Err(FetchError::Transport("connection refused".to_string())),
        );

        assert_eq!(view.phase, Phase::Error);
        assert_eq!(
            view.error.as_deref(),
            Some("Network error: connection refused")
        );
        assert!(view.articles.is_empty());
        assert!(view.can_retry());
    }

    #[test]
    fn test_load_more_appends_in_order() {
        let view = mounted(3, page(articles(1..4), 9, Some(NEXT)));

        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        let request = request.unwrap();
        assert_eq!(
            request.query,
            ArticleQuery::List {
                limit: 3,
                offset: 3
            }
        );
        let view = complete(view, &request, Ok(page(articles(4..7), 9, Some(NEXT))));

        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(view.page_index, 1);
        assert!(view.has_more);

        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        let request = request.unwrap();
        assert_eq!(
            request.query,
            ArticleQuery::List {
                limit: 3,
                offset: 6
            }
        );
        let view = complete(view, &request, Ok(page(articles(7..10), 9, None)));

        assert_eq!(ids(&view), (1..10).collect::<Vec<_>>());
        assert_eq!(view.page_index, 2);
        assert!(!view.has_more);
        assert!(!view.can_load_more());
    }

    #[test]
    fn test_load_more_strictly_grows_and_keeps_prefix() {
        let mut view = mounted(2, page(articles(1..3), 100, Some(NEXT)));
        for round in 0..5u64 {
            let before = ids(&view);
            let (next, request) = view.update(ListEvent::LoadMoreRequested);
            let request = request.unwrap();
            let start = 3 + round * 2;
            view = complete(
                next,
                &request,
                Ok(page(articles(start..start + 2), 100, Some(NEXT))),
            );
            let after = ids(&view);
            assert!(after.len() > before.len());
            assert_eq!(&after[..before.len()], &before[..]);
        }
    }

    #[test]
    fn test_load_more_while_loading_is_noop() {
        let (view, request) = ListView::new(12).update(ListEvent::InitialMount);
        assert!(request.is_some());
        let snapshot = view.clone();

        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        assert!(request.is_none());
        assert_eq!(view, snapshot);
    }

    #[test]
    fn test_load_more_without_next_is_noop() {
        let view = mounted(12, page(articles(1..5), 4, None));
        let snapshot = view.clone();

        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        assert!(request.is_none());
        assert_eq!(view, snapshot);
    }

    #[test]
    fn test_load_more_disabled_in_search_mode() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let (view, request) = view.update(ListEvent::SearchSubmitted("apollo".to_string()));
        let view = complete(
            view,
            &request.unwrap(),
            Ok(page(articles(50..55), 40, Some(NEXT))),
        );

        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        assert!(request.is_none());
        assert_eq!(view.phase, Phase::Loaded);
    }

    #[test]
    fn test_load_more_failure_keeps_articles() {
        let view = mounted(3, page(articles(1..4), 9, Some(NEXT)));
        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        let view = complete(
            view,
            &request.unwrap(),
            Err(FetchError::HttpStatus { code: 502 }),
        );

        assert_eq!(view.phase, Phase::Error);
        assert_eq!(view.error.as_deref(), Some("HTTP error: 502"));
        assert_eq!(ids(&view), vec![1, 2, 3]);
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn test_load_more_disabled_after_failure_until_retry() {
        let view = mounted(3, page(articles(1..4), 9, Some(NEXT)));
        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        let view = complete(
            view,
            &request.unwrap(),
            Err(FetchError::HttpStatus { code: 502 }),
        );

        let (view, request) = view.update(ListEvent::LoadMoreRequested);
        assert!(request.is_none());

        let (view, request) = view.update(ListEvent::RetryRequested);
        let request = request.unwrap();
        assert_eq!(
            request.query,
            ArticleQuery::List {
                limit: 3,
                offset: 3
            }
        );
        let view = complete(view, &request, Ok(page(articles(4..7), 9, Some(NEXT))));

        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(view.page_index, 1);
        assert!(view.can_load_more());
    }

    #[test]
    fn test_search_replaces_results() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let (view, request) = view.update(ListEvent::SearchSubmitted("  apollo ".to_string()));
        let request = request.unwrap();

        assert_eq!(
            request.query,
            ArticleQuery::Search {
                query: "apollo".to_string(),
                limit: 12
            }
        );
        assert!(view.search_active);

        let view = complete(view, &request, Ok(page(articles(100..103), 3, None)));

        assert_eq!(view.phase, Phase::Loaded);
        assert_eq!(ids(&view), vec![100, 101, 102]);
        assert!(view.search_active);
        assert!(!view.has_more);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.query, "apollo");
    }

    #[test]
    fn test_search_forces_has_more_false() {
        let view = ListView::new(12);
        let (view, request) = view.update(ListEvent::SearchSubmitted("mars".to_string()));
        let view = complete(
            view,
            &request.unwrap(),
            Ok(page(articles(1..13), 200, Some(NEXT))),
        );
        assert!(!view.has_more);
        assert!(!view.can_load_more());
    }

    #[test]
    fn test_search_empty_result_is_not_error() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let (view, request) = view.update(ListEvent::SearchSubmitted("starship".to_string()));
        let view = complete(view, &request.unwrap(), Ok(page(vec![], 0, None)));

        assert_eq!(view.phase, Phase::Loaded);
        assert!(view.articles.is_empty());
        assert!(view.search_active);
        assert!(view.is_empty_result());
        assert_eq!(view.error, None);
    }

    #[test]
    fn test_search_failure_clears_results() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let (view, request) = view.update(ListEvent::SearchSubmitted("europa".to_string()));
        let view = complete(
            view,
            &request.unwrap(),
            Err(FetchError::Decode("expected value".to_string())),
        );

        assert_eq!(view.phase, Phase::Error);
        assert!(view.search_active);
        assert!(view.articles.is_empty());
        assert_eq!(view.query, "europa");
    }

    #[test]
    fn test_blank_search_behaves_as_initial_mount() {
        let first = page(articles(1..13), 30, Some(NEXT));

        let (mounted_view, mount_request) = ListView::new(12).update(ListEvent::InitialMount);
        let mount = mount_request.clone().unwrap();
        let mounted_view = complete(mounted_view, &mount, Ok(first.clone()));

        for blank in ["", "   ", "\t\n"] {
            let (view, request) =
                ListView::new(12).update(ListEvent::SearchSubmitted(blank.to_string()));
            let request = request.unwrap();
            assert_eq!(request.query, mount_request.as_ref().unwrap().query);

            let view = complete(view, &request, Ok(first.clone()));
            assert_eq!(view.articles, mounted_view.articles);
            assert!(!view.search_active);
            assert_eq!(view.query, "");
            assert_eq!(view.has_more, mounted_view.has_more);
            assert_eq!(view.page_index, mounted_view.page_index);
        }
    }

    #[test]
    fn test_blank_search_leaves_search_mode() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let (view, request) = view.update(ListEvent::SearchSubmitted("apollo".to_string()));
        let view = complete(view, &request.unwrap(), Ok(page(articles(50..52), 2, None)));
        assert!(view.search_active);

        let (view, request) = view.update(ListEvent::SearchSubmitted(" ".to_string()));
        let view = complete(
            view,
            &request.unwrap(),
            Ok(page(articles(1..13), 30, Some(NEXT))),
        );
        assert!(!view.search_active);
        assert!(view.can_load_more());
        assert_eq!(view.articles.len(), 12);
    }

    #[test]
    fn test_repeated_search_is_idempotent() {
        let results = page(articles(7..10), 3, None);

        let search = ListEvent::SearchSubmitted("apollo".to_string());
        let (once, request) = ListView::new(12).update(search.clone());
        let once = complete(once, &request.unwrap(), Ok(results.clone()));

        let (twice, request) = once.clone().update(search);
        let twice = complete(twice, &request.unwrap(), Ok(results));

        assert_eq!(build_list_output(&once), build_list_output(&twice));
        assert_eq!(once.articles, twice.articles);
        assert_eq!(once.query, twice.query);
    }

    #[test]
    fn test_search_while_loading_is_ignored() {
        let (view, _) = ListView::new(12).update(ListEvent::InitialMount);
        let snapshot = view.clone();
        let (view, request) = view.update(ListEvent::SearchSubmitted("apollo".to_string()));
        assert!(request.is_none());
        assert_eq!(view, snapshot);
    }

    #[test]
    fn test_search_reset_reloads_first_page() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let (view, request) = view.update(ListEvent::SearchSubmitted("apollo".to_string()));
        let view = complete(view, &request.unwrap(), Ok(page(articles(50..52), 2, None)));

        let (view, request) = view.update(ListEvent::SearchReset);
        let request = request.unwrap();
        assert_eq!(
            request.query,
            ArticleQuery::List {
                limit: 12,
                offset: 0
            }
        );
        assert!(!view.search_active);
        assert_eq!(view.query, "");

        let view = complete(view, &request, Ok(page(articles(1..13), 30, Some(NEXT))));
        assert_eq!(view.articles.len(), 12);
        assert!(view.has_more);
    }

    #[test]
    fn test_search_reset_supersedes_inflight_search() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let (view, search) = view.update(ListEvent::SearchSubmitted("apollo".to_string()));
        let search = search.unwrap();
        let (view, reset) = view.update(ListEvent::SearchReset);
        let reset = reset.unwrap();
        assert_ne!(search.ticket, reset.ticket);

        // The superseded search answers late and must be discarded.
        let view = complete(view, &search, Ok(page(articles(50..52), 2, None)));
        assert_eq!(view.phase, Phase::Loading);
        assert!(!view.search_active);

        let view = complete(view, &reset, Ok(page(articles(1..13), 30, Some(NEXT))));
        assert_eq!(view.phase, Phase::Loaded);
        assert_eq!(view.articles.len(), 12);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let snapshot = view.clone();

        let (view, request) = view.update(ListEvent::PageLoaded {
            ticket: 999,
            result: Ok(page(articles(90..95), 5, None)),
        });
        assert!(request.is_none());
        assert_eq!(view, snapshot);
    }

    #[test]
    fn test_retry_after_initial_failure() {
        let (view, request) = ListView::new(12).update(ListEvent::InitialMount);
        let view = complete(
            view,
            &request.unwrap(),
            Err(FetchError::HttpStatus { code: 503 }),
        );

        let (view, request) = view.update(ListEvent::RetryRequested);
        let request = request.unwrap();
        assert_eq!(
            request.query,
            ArticleQuery::List {
                limit: 12,
                offset: 0
            }
        );
        assert_eq!(view.phase, Phase::Loading);
        assert_eq!(view.error, None);

        let view = complete(view, &request, Ok(page(articles(1..13), 30, Some(NEXT))));
        assert_eq!(view.phase, Phase::Loaded);
        assert!(!view.can_retry());
    }

    #[test]
    fn test_retry_after_search_failure_repeats_search() {
        let (view, request) =
            ListView::new(12).update(ListEvent::SearchSubmitted("artemis".to_string()));
        let view = complete(
            view,
            &request.unwrap(),
            Err(FetchError::Transport("timed out".to_string())),
        );

        let (view, request) = view.update(ListEvent::RetryRequested);
        assert_eq!(
            request.unwrap().query,
            ArticleQuery::Search {
                query: "artemis".to_string(),
                limit: 12
            }
        );
        assert!(view.search_active);
    }

    #[test]
    fn test_retry_without_failure_is_noop() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let snapshot = view.clone();
        let (view, request) = view.update(ListEvent::RetryRequested);
        assert!(request.is_none());
        assert_eq!(view, snapshot);
    }

    #[test]
    fn test_build_list_output_browse() {
        let view = mounted(12, page(articles(1..13), 30, Some(NEXT)));
        let output = build_list_output(&view);

        assert_eq!(output.status, Phase::Loaded);
        assert_eq!(output.search_query, None);
        assert_eq!(output.articles.len(), 12);
        assert_eq!(output.pagination.loaded, 12);
        assert_eq!(output.pagination.total_count, 30);
        assert_eq!(
            output.pagination.next_page_command.as_deref(),
            Some("spacenews list --page 2 --limit 12")
        );
    }

    #[test]
    fn test_build_list_output_search() {
        let (view, request) =
            ListView::new(12).update(ListEvent::SearchSubmitted("venus".to_string()));
        let view = complete(view, &request.unwrap(), Ok(page(articles(1..3), 2, None)));
        let output = build_list_output(&view);

        assert_eq!(output.search_query.as_deref(), Some("venus"));
        assert_eq!(output.pagination.next_page_command, None);

        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"status\":\"loaded\""));
    }

    #[test]
    fn test_build_page_output() {
        let output = build_page_output(&page(articles(25..37), 100, Some(NEXT)), 3, 12);

        assert_eq!(output.pagination.page_index, 2);
        assert_eq!(output.pagination.first_position, 25);
        assert_eq!(output.pagination.loaded, 12);
        assert!(output.pagination.has_more);
        assert_eq!(
            output.pagination.next_page_command.as_deref(),
            Some("spacenews list --page 4 --limit 12")
        );
    }

    #[test]
    fn test_build_page_output_last_page() {
        let output = build_page_output(&page(articles(97..101), 100, None), 9, 12);

        assert!(!output.pagination.has_more);
        assert_eq!(output.pagination.next_page_command, None);
    }

    #[test]
    fn test_build_page_output_huge_page_number() {
        let output = build_page_output(&page(vec![], 100, Some(NEXT)), usize::MAX, 12);

        assert_eq!(output.pagination.first_position, usize::MAX);
        assert_eq!(
            output.pagination.next_page_command,
            Some(format!("spacenews list --page {} --limit 12", usize::MAX))
        );
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(30, 12), 3);
        assert_eq!(total_pages(5, 0), 5);
    }
}
