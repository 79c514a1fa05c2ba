//! Runs the view state machines against an [`ArticleSource`].
//!
//! Each call applies one user event, performs the request the transition asks
//! for, and feeds the outcome back until the machine settles. Only one request
//! per view is in flight at a time.

use crate::client::ArticleSource;
use spacenews_core::detail_state::{DetailEvent, DetailRequest, DetailView};
use spacenews_core::error::FetchError;
use spacenews_core::list_state::{ListEvent, ListRequest, ListView};
use spacenews_core::query::ArticleQuery;

pub async fn drive_list<S: ArticleSource>(
    source: &S,
    view: ListView,
    event: ListEvent,
) -> ListView {
    log::debug!("list event: {event:?}");
    let (mut view, mut request) = view.update(event);

    while let Some(ListRequest { ticket, query }) = request.take() {
        let result = match &query {
            ArticleQuery::List { limit, offset } => source.list_articles(*limit, *offset).await,
            ArticleQuery::Search { query, limit } => source.search_articles(query, *limit).await,
            ArticleQuery::Get { .. } => Err(FetchError::InvalidRequest(
                "the list view cannot load a single article".to_string(),
            )),
        };

        if let Err(err) = &result {
            log::info!("list request {ticket} failed: {err}");
        }

        (view, request) = view.update(ListEvent::PageLoaded { ticket, result });
    }

    view
}

pub async fn drive_detail<S: ArticleSource>(
    source: &S,
    view: DetailView,
    event: DetailEvent,
) -> DetailView {
    log::debug!("detail event: {event:?}");
    let (mut view, mut request) = view.update(event);

    while let Some(DetailRequest { ticket, query }) = request.take() {
        let result = match &query {
            ArticleQuery::Get { id } => source.get_article(id).await,
            other => Err(FetchError::InvalidRequest(format!(
                "the detail view cannot run {other:?}"
            ))),
        };

        match &result {
            Err(err) if err.is_not_found() => {
                log::info!("detail request {ticket}: no such article")
            }
            Err(err) => log::info!("detail request {ticket} failed: {err}"),
            Ok(_) => {}
        }

        (view, request) = view.update(DetailEvent::ArticleLoaded { ticket, result });
    }

    view
}
