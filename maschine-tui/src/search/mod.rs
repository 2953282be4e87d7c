//! Incremental user search.
//!
//! [`SearchController`] is a synchronous state machine: it never performs I/O.
//! Feeding it a [`SearchEvent`] yields the next state and, at most, one
//! [`Effect`] for the runtime to carry out. Search completions are tagged with
//! the sequence number of the query they answer, and only the completion for
//! the latest sequence may change what is shown.

mod controller;
mod format;
mod view;

pub use controller::{Effect, SearchController, SearchEvent, SearchOutcome, SearchState};
pub use format::format_count;
pub use view::{results_view, ProfileRow, ResultsView};

/// Minimum trimmed query length, in characters, before a search is issued.
pub const MIN_QUERY_LEN: usize = 2;

/// Shown to the user whenever a search fails, whatever the cause.
pub const SEARCH_FAILED: &str = "Failed to search users";
