//! Milestone model definition and its value types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Identity of a milestone within a session's list.
///
/// Ids exist only to tell list items apart across edits; they are never
/// written to the query string. Milestones rebuilt from a query carry their
/// query index, milestones inserted by an edit carry a generated token, and
/// the two spaces never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MilestoneId {
    /// Index the milestone had in the decoded query
    Positional(usize),
    /// Token from [`crate::IdGenerator`]
    Generated(String),
}

/// Positional ids display as `#<index>`, generated ids as their token.
impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneId::Positional(index) => write!(f, "#{index}"),
            MilestoneId::Generated(token) => f.write_str(token),
        }
    }
}

/// Offset in whole days from the previous milestone's resolved date.
///
/// Offsets come from user-edited query strings, so a value that is not a
/// number is kept as [`DayOffset::NotANumber`] and shows up in the rendered
/// dates instead of being replaced by a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOffset {
    /// A whole number of days, possibly zero or negative
    Days(i64),
    /// Input that held no leading integer
    NotANumber,
}

impl DayOffset {
    /// Parses text with `parseInt`-style leniency.
    ///
    /// Leading whitespace is skipped, one optional sign is accepted, and the
    /// longest run of decimal digits that follows is used; anything after it
    /// is ignored. No digits, or a run too large for `i64`, gives
    /// [`DayOffset::NotANumber`].
    ///
    /// ```rust
    /// use hizuke_core::DayOffset;
    ///
    /// assert_eq!(DayOffset::parse("-3"), DayOffset::Days(-3));
    /// assert_eq!(DayOffset::parse(" 12days"), DayOffset::Days(12));
    /// assert_eq!(DayOffset::parse("soon"), DayOffset::NotANumber);
    /// ```
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return DayOffset::NotANumber;
        }

        let digits = &rest[..digits_len];
        let parsed = if negative {
            format!("-{digits}").parse::<i64>()
        } else {
            digits.parse::<i64>()
        };
        parsed.map_or(DayOffset::NotANumber, DayOffset::Days)
    }

    /// Number of days, or `None` for a not-a-number offset.
    pub fn days(self) -> Option<i64> {
        match self {
            DayOffset::Days(days) => Some(days),
            DayOffset::NotANumber => None,
        }
    }
}

impl From<i64> for DayOffset {
    fn from(days: i64) -> Self {
        DayOffset::Days(days)
    }
}

/// Formats like the wrapped integer, so `{:+}` shows the sign. Not-a-number
/// is `NaN`, the spelling the query string carries.
impl fmt::Display for DayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOffset::Days(days) => fmt::Display::fmt(days, f),
            DayOffset::NotANumber => f.write_str("NaN"),
        }
    }
}

impl Serialize for DayOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DayOffset::Days(days) => serializer.serialize_i64(*days),
            DayOffset::NotANumber => serializer.serialize_none(),
        }
    }
}

/// One named point in a day-offset chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// List identity, never persisted
    pub id: MilestoneId,

    /// Free-text label, may be empty
    pub name: String,

    /// Days after the previous milestone; ignored at position 0
    pub duration_days_from_previous_one: DayOffset,
}

impl Milestone {
    /// Creates a milestone with the given identity, name, and offset.
    pub fn new(id: MilestoneId, name: impl Into<String>, duration: DayOffset) -> Self {
        Self {
            id,
            name: name.into(),
            duration_days_from_previous_one: duration,
        }
    }

    /// A blank milestone: empty name, zero offset.
    pub fn empty(id: MilestoneId) -> Self {
        Self::new(id, "", DayOffset::Days(0))
    }

    /// Compares name and offset, ignoring identity.
    pub fn same_content(&self, other: &Milestone) -> bool {
        self.name == other.name
            && self.duration_days_from_previous_one == other.duration_days_from_previous_one
    }
}
