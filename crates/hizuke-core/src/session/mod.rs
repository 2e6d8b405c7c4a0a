//! Session store: the one [`State`] a front end edits, kept in step with its
//! query string.
//!
//! A [`Session`] owns the current state and its encoded query. The state is
//! only ever swapped out whole through [`Session::replace_state`], and
//! swapping it re-encodes the query; that is the only side effect. Whoever
//! drives the session (a CLI invocation, a UI controller) owns it
//! exclusively, so edits are serialized by construction.
//!
//! ```text
//!   edit ──▶ Edit::apply ──▶ replace_state ──▶ encode ──▶ query()
//!                                  │
//!                                  └──────────▶ render() ──▶ text
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hizuke_core::{params::Edit, SessionBuilder};
//! use jiff::civil::date;
//!
//! let mut session = SessionBuilder::new()
//!     .with_query(Some("lineFormat=%7Bdate%7D+%7Bname%7D&startDate=2024-01-10"))
//!     .with_today(Some(date(2024, 1, 10)))
//!     .build()
//!     .unwrap();
//!
//! session.apply(&Edit::InsertFirst).unwrap();
//! session
//!     .apply(&Edit::Rename { index: 0, name: "Kickoff".to_string() })
//!     .unwrap();
//!
//! assert_eq!(session.render(), "01/10 Kickoff");
//! assert!(session.query().contains("milestone%5B0%5D.name=Kickoff"));
//! ```

pub mod builder;

pub use builder::SessionBuilder;
use log::debug;

use crate::{
    chain::{self, ResolvedMilestone},
    codec::{encode, StateCodec},
    error::Result,
    id::IdGenerator,
    models::State,
    params::Edit,
};

/// Owner of a session's state and its shareable query.
#[derive(Debug, Clone)]
pub struct Session {
    state: State,
    query: String,
    codec: StateCodec,
    ids: IdGenerator,
}

impl Session {
    pub(crate) fn new(state: State, codec: StateCodec, ids: IdGenerator) -> Self {
        let query = encode(&state);
        Self {
            state,
            query,
            codec,
            ids,
        }
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The query string encoding the current state.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Swaps in a new state and re-encodes the query.
    pub fn replace_state(&mut self, state: State) {
        self.query = encode(&state);
        self.state = state;
        debug!("State replaced; query is now {} bytes", self.query.len());
    }

    /// Applies an edit and replaces the state with the result.
    ///
    /// # Errors
    ///
    /// Propagates the edit's error; the state and query are left unchanged.
    pub fn apply(&mut self, edit: &Edit) -> Result<&State> {
        let next = edit.apply(&self.state, &mut self.ids, self.codec.today())?;
        debug!("Applied edit: {}", edit.describe());
        self.replace_state(next);
        Ok(&self.state)
    }

    /// Milestones of the current state with their resolved dates.
    pub fn resolve(&self) -> Vec<ResolvedMilestone<'_>> {
        chain::resolve(&self.state)
    }

    /// The rendered text of the current state.
    pub fn render(&self) -> String {
        chain::render(&self.state)
    }

    /// A link to `base` carrying the current query. Any query or fragment
    /// already on `base` is replaced.
    pub fn share_url(&self, base: &str) -> String {
        let base = base
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        format!("{base}?{}", self.query)
    }

    /// Consumes the session, returning its state.
    pub fn into_state(self) -> State {
        self.state
    }
}
