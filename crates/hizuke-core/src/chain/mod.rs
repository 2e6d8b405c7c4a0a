//! Date-chain resolution and line rendering.
//!
//! A chain starts at the state's anchor date. The milestone at position 0
//! sits on the anchor, and each later milestone sits its offset's worth of
//! days after the one before it. Offsets may be zero or negative.
//!
//! Resolution never fails. Once the chain meets a not-a-number offset, an
//! unparseable anchor, or arithmetic outside the supported years, that
//! milestone and everything after it resolve to [`ResolvedDate::NotANumber`],
//! which renders as `NaN/NaN`.
//!
//! ```text
//! anchor 2024-01-10
//!   [0] +0 (ignored)  → 2024-01-10
//!   [1] +5            → 2024-01-15
//!   [2] -2            → 2024-01-13
//! ```


use std::fmt;

use jiff::civil::Date;
use log::warn;

use crate::{
    date::{add_days, format_canonical, format_month_day},
    models::{Milestone, State},
};

/// Placeholder replaced by the resolved `MM/dd` date.
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Placeholder replaced by the milestone name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// A milestone's position on the calendar, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDate {
    Date(Date),
    NotANumber,
}

impl ResolvedDate {
    /// The date, or `None` when the chain broke at or before this point.
    pub fn date(self) -> Option<Date> {
        match self {
            ResolvedDate::Date(date) => Some(date),
            ResolvedDate::NotANumber => None,
        }
    }

    /// `yyyy-MM-dd`, or `NaN` for a broken chain.
    pub fn canonical(self) -> String {
        match self {
            ResolvedDate::Date(date) => format_canonical(date),
            ResolvedDate::NotANumber => "NaN".to_string(),
        }
    }
}

/// Displays as `MM/dd`, the form substituted for `{date}`.
impl fmt::Display for ResolvedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedDate::Date(date) => f.write_str(&format_month_day(*date)),
            ResolvedDate::NotANumber => f.write_str("NaN/NaN"),
        }
    }
}

/// A milestone paired with its resolved date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMilestone<'a> {
    pub position: usize,
    pub milestone: &'a Milestone,
    pub date: ResolvedDate,
}

/// Resolves every milestone of `state` to a date, in order.
pub fn resolve(state: &State) -> Vec<ResolvedMilestone<'_>> {
    let anchor = match state.start() {
        Ok(date) => ResolvedDate::Date(date),
        Err(e) => {
            warn!("Cannot anchor chain: {e}");
            ResolvedDate::NotANumber
        }
    };

    state
        .milestones
        .iter()
        .enumerate()
        .scan(anchor, |current, (position, milestone)| {
            if position > 0 {
                *current = step(*current, milestone);
            }
            Some(ResolvedMilestone {
                position,
                milestone,
                date: *current,
            })
        })
        .collect()
}

fn step(previous: ResolvedDate, milestone: &Milestone) -> ResolvedDate {
    let (Some(date), Some(days)) = (
        previous.date(),
        milestone.duration_days_from_previous_one.days(),
    ) else {
        return ResolvedDate::NotANumber;
    };
    match add_days(date, days) {
        Ok(next) => ResolvedDate::Date(next),
        Err(e) => {
            warn!("{e}");
            ResolvedDate::NotANumber
        }
    }
}

/// Substitutes every `{date}` and then every `{name}` in `line_format`.
///
/// Replacement is literal: nothing is escaped or trimmed, and placeholder
/// text inside the substituted values is left alone.
pub fn format_line(line_format: &str, date: &str, name: &str) -> String {
    line_format
        .split(DATE_PLACEHOLDER)
        .map(|part| part.replace(NAME_PLACEHOLDER, name))
        .collect::<Vec<_>>()
        .join(date)
}

/// Renders the chain: one formatted line per milestone joined by `\n`, with
/// no trailing newline. An empty chain renders as an empty string.
///
/// # Examples
///
/// ```rust
/// use hizuke_core::{chain::render, models::{DayOffset, Milestone, MilestoneId, State}};
/// use jiff::civil::date;
///
/// let mut state = State::new(date(2024, 3, 1));
/// state.line_format = "{date}: {name}".to_string();
/// state.milestones.push(Milestone::new(MilestoneId::Positional(0), "Kickoff", DayOffset::Days(0)));
/// assert_eq!(render(&state), "03/01: Kickoff");
/// ```
pub fn render(state: &State) -> String {
    resolve(state)
        .iter()
        .map(|resolved| {
            format_line(
                &state.line_format,
                &resolved.date.to_string(),
                &resolved.milestone.name,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
