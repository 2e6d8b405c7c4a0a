//! Bidirectional mapping between [`State`] and the URL query string.
//!
//! The query string is the only durable form of a session, so its schema is a
//! stable contract for bookmarked links:
//!
//! | key                     | meaning                               |
//! |-------------------------|---------------------------------------|
//! | `lineFormat`            | line template                         |
//! | `startDate`             | chain anchor, `yyyy-MM-dd`            |
//! | `milestone[i].name`     | label for position `i`                |
//! | `milestone[i].duration` | days after position `i - 1`, base 10  |
//!
//! Decoding is lenient. A missing or malformed `startDate` becomes today, a
//! missing `lineFormat` becomes [`DEFAULT_LINE_FORMAT`], and a missing or
//! non-numeric duration is kept as not-a-number. Gaps in the milestone
//! indices are dropped with a warning. [`StateCodec::decode_strict`] rejects gaps
//! instead.
//!
//! # Examples
//!
//! ```rust
//! use hizuke_core::codec::{decode, encode};
//!
//! let state = decode("?startDate=2024-03-01&milestone[0].name=Kickoff&milestone[0].duration=0");
//! assert_eq!(state.start_date, "2024-03-01");
//! assert_eq!(state.milestones[0].name, "Kickoff");
//!
//! let query = encode(&state);
//! assert!(decode(&query).eq_ignoring_ids(&state));
//! ```

mod decode;
mod encode;
pub mod keys;

#[cfg(test)]
mod tests;

use jiff::civil::Date;
use log::{debug, warn};

use self::decode::{first_value, query_pairs, MilestoneEntries, QueryPairs};
pub use self::encode::encode;
use crate::{
    date::{self, format_canonical, parse_canonical},
    error::{HizukeError, Result},
    models::{State, DEFAULT_LINE_FORMAT},
};
use keys::{LINE_FORMAT_KEY, START_DATE_KEY};

/// Query decoder with configurable fallbacks.
#[derive(Debug, Clone)]
pub struct StateCodec {
    today: Option<Date>,
    default_line_format: String,
}

impl StateCodec {
    /// Creates a codec that falls back to the system date and the default
    /// line format.
    pub fn new() -> Self {
        Self {
            today: None,
            default_line_format: DEFAULT_LINE_FORMAT.to_string(),
        }
    }

    /// Pins the date used when `startDate` is absent or malformed.
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        self.today = today;
        self
    }

    /// Sets the template used when `lineFormat` is absent.
    pub fn with_default_line_format(mut self, line_format: impl Into<String>) -> Self {
        self.default_line_format = line_format.into();
        self
    }

    /// The date fallbacks resolve to.
    pub fn today(&self) -> Date {
        self.today.unwrap_or_else(date::today)
    }

    /// Reconstructs a state from a query, `?query`, or full URL.
    ///
    /// Never fails. Milestone index gaps are logged and the surviving
    /// milestones keep their relative order.
    pub fn decode(&self, query: &str) -> State {
        let pairs = query_pairs(query);
        let entries = MilestoneEntries::collect(&pairs);
        for gap in entries.gaps() {
            warn!(
                "Milestone indices {}..{} are missing from the query; later milestones move up",
                gap.start, gap.end
            );
        }
        self.assemble(&pairs, entries)
    }

    /// Like [`StateCodec::decode`], but rejects gapped milestone indices.
    ///
    /// # Errors
    ///
    /// Returns [`HizukeError::MilestoneGap`] naming the smallest missing
    /// index.
    pub fn decode_strict(&self, query: &str) -> Result<State> {
        let pairs = query_pairs(query);
        let entries = MilestoneEntries::collect(&pairs);
        if let Some(index) = entries.first_gap() {
            return Err(HizukeError::MilestoneGap { index });
        }
        Ok(self.assemble(&pairs, entries))
    }

    fn assemble(&self, pairs: &QueryPairs, entries: MilestoneEntries) -> State {
        let line_format = first_value(pairs, LINE_FORMAT_KEY)
            .map_or_else(|| self.default_line_format.clone(), str::to_string);
        let start_date = self.start_date(first_value(pairs, START_DATE_KEY));
        let milestones = entries.into_milestones();
        debug!(
            "Decoded state: start {start_date}, {} milestones",
            milestones.len()
        );

        State {
            line_format,
            start_date,
            milestones,
        }
    }

    fn start_date(&self, raw: Option<&str>) -> String {
        match raw {
            Some(text) => match parse_canonical(text) {
                Ok(_) => text.to_string(),
                Err(e) => {
                    warn!("Replacing startDate with today: {e}");
                    format_canonical(self.today())
                }
            },
            None => format_canonical(self.today()),
        }
    }
}

impl Default for StateCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes with the default fallbacks. See [`StateCodec::decode`].
pub fn decode(query: &str) -> State {
    StateCodec::new().decode(query)
}

/// Decodes with the default fallbacks, rejecting gaps. See
/// [`StateCodec::decode_strict`].
///
/// # Errors
///
/// Returns [`HizukeError::MilestoneGap`] naming the smallest missing index.
pub fn decode_strict(query: &str) -> Result<State> {
    StateCodec::new().decode_strict(query)
}
