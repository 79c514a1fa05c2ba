//! Core library for spacenews
//!
//! This crate implements the **Functional Core** of the spacenews reader,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`spacenews_core`** (this crate): data model, request shaping and the view
//!   state machines, with zero I/O
//! - **`spacenews`**: the HTTP client, the drivers that run the state machines
//!   and the terminal front-end (the Imperative Shell)
//!
//! The list and detail views are explicit state values with a pure transition
//! function. A transition that needs data returns a request description; the
//! shell performs it and feeds the outcome back as another event. This keeps
//! every view rule testable with fixture data, no mocking required.
//!
//! # Module Organization
//!
//! - [`articles`]: API data model and output transforms
//! - [`query`]: URLs for the list, search and get-by-id operations
//! - [`error`]: failure kinds of the article client
//! - [`list_state`]: paginated/searchable list view
//! - [`detail_state`]: single article view
//!
//! # Example Usage
//!
//! ```rust
//! use spacenews_core::list_state::{ListEvent, ListView, Phase};
//! use spacenews_core::query::ArticleQuery;
//!
//! let (view, request) = ListView::new(12).update(ListEvent::InitialMount);
//! assert_eq!(view.phase, Phase::Loading);
//! assert_eq!(
//!     request.unwrap().query,
//!     ArticleQuery::List { limit: 12, offset: 0 }
//! );
//! ```

pub mod articles;
pub mod detail_state;
pub mod error;
pub mod list_state;
pub mod query;
