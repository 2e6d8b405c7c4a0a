//! Session state model.

use jiff::civil::Date;
use serde::Serialize;

use super::Milestone;
use crate::{
    date::{format_canonical, parse_canonical},
    error::Result,
};

/// Line template used when a query carries no `lineFormat`.
pub const DEFAULT_LINE_FORMAT: &str = "- [ ] {date} {name}";

/// The whole editable state of a session.
///
/// A state is never edited in place once it belongs to a
/// [`crate::Session`]; every edit builds a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Template with `{date}` and `{name}` placeholders
    pub line_format: String,

    /// Chain anchor in `yyyy-MM-dd` form
    pub start_date: String,

    /// Chain order and display order
    pub milestones: Vec<Milestone>,
}

impl State {
    /// Creates an empty chain anchored at `start_date` with the default line
    /// format.
    pub fn new(start_date: Date) -> Self {
        Self {
            line_format: DEFAULT_LINE_FORMAT.to_string(),
            start_date: format_canonical(start_date),
            milestones: Vec::new(),
        }
    }

    /// Parses the anchor date.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HizukeError::InvalidDate`] if `start_date` was set to
    /// something that is not a real `yyyy-MM-dd` date.
    pub fn start(&self) -> Result<Date> {
        parse_canonical(&self.start_date)
    }

    /// Compares every field, treating milestones as equal when their names
    /// and offsets match regardless of id.
    pub fn eq_ignoring_ids(&self, other: &State) -> bool {
        self.line_format == other.line_format
            && self.start_date == other.start_date
            && self.milestones.len() == other.milestones.len()
            && self
                .milestones
                .iter()
                .zip(&other.milestones)
                .all(|(a, b)| a.same_content(b))
    }
}
