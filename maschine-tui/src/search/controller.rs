use crate::types::Profile;

use super::{MIN_QUERY_LEN, SEARCH_FAILED};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Profile>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<Profile>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query text changed (keystroke, paste, clear).
    QueryChanged(String),
    /// A search issued with `seq` settled.
    Completed { seq: u64, outcome: SearchOutcome },
    /// A result row was activated.
    ProfileSelected { fid: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search { seq: u64, query: String },
    ViewProfile { fid: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchController {
    query: String,
    state: SearchState,
    /// Bumped on every query change; completions tagged with anything else
    /// are stale.
    seq: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    pub fn is_loading(&self) -> bool {
        self.state == SearchState::Loading
    }

    /// Profiles of the last successful search for the current query.
    pub fn results(&self) -> &[Profile] {
        match &self.state {
            SearchState::Success(profiles) => profiles,
            _ => &[],
        }
    }

    pub fn is_searchable(query: &str) -> bool {
        query.trim().chars().count() >= MIN_QUERY_LEN
    }

    /// Pure transition from the current state and an event to the next state
    /// and the effect the runtime should perform.
    pub fn transition(self, event: SearchEvent) -> (Self, Option<Effect>) {
        match event {
            SearchEvent::QueryChanged(query) => {
                let seq = self.seq.wrapping_add(1);
                if !Self::is_searchable(&query) {
                    let next = Self {
                        query,
                        state: SearchState::Idle,
                        seq,
                    };
                    return (next, None);
                }

                let effect = Effect::Search {
                    seq,
                    query: query.clone(),
                };
                let next = Self {
                    query,
                    state: SearchState::Loading,
                    seq,
                };
                (next, Some(effect))
            }
            SearchEvent::Completed { seq, outcome } => {
                if seq != self.seq || self.state != SearchState::Loading {
                    return (self, None);
                }

                let state = match outcome {
                    SearchOutcome::Found(profiles) => SearchState::Success(profiles),
                    SearchOutcome::Failed => SearchState::Error(SEARCH_FAILED.to_string()),
                };
                (Self { state, ..self }, None)
            }
            SearchEvent::ProfileSelected { fid } => (self, Some(Effect::ViewProfile { fid })),
        }
    }

    /// Apply `event` in place.
    pub fn update(&mut self, event: SearchEvent) -> Option<Effect> {
        let (next, effect) = std::mem::take(self).transition(event);
        *self = next;
        effect
    }
}
