//! Query keys that address a single milestone field.

use std::{fmt, sync::LazyLock};

use log::warn;
use regex::Regex;

/// Query key holding the line template.
pub const LINE_FORMAT_KEY: &str = "lineFormat";

/// Query key holding the chain anchor date.
pub const START_DATE_KEY: &str = "startDate";

// Anchored at the start only: anything after the field name is ignored.
static MILESTONE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^milestone\[(?<index>\d+)\]\.(?<field>name|duration)")
        .expect("milestone key pattern is valid")
});

/// Which half of a milestone a key carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MilestoneField {
    Name,
    Duration,
}

impl MilestoneField {
    /// The field's spelling inside a query key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneField::Name => "name",
            MilestoneField::Duration => "duration",
        }
    }
}

/// A parsed `milestone[<index>].<field>` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MilestoneKey {
    pub index: usize,
    pub field: MilestoneField,
}

impl MilestoneKey {
    pub fn new(index: usize, field: MilestoneField) -> Self {
        Self { index, field }
    }

    /// Parses a query key, returning `None` for keys that do not address a
    /// milestone field. Indices too large for `usize` are dropped with a
    /// warning.
    pub fn parse(key: &str) -> Option<Self> {
        let captures = MILESTONE_KEY.captures(key)?;
        let field = match &captures["field"] {
            "name" => MilestoneField::Name,
            _ => MilestoneField::Duration,
        };
        match captures["index"].parse() {
            Ok(index) => Some(Self { index, field }),
            Err(_) => {
                warn!("Ignoring query key with oversized milestone index: {key}");
                None
            }
        }
    }
}

impl fmt::Display for MilestoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "milestone[{}].{}", self.index, self.field.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_milestone_keys() {
        assert_eq!(
            MilestoneKey::parse("milestone[0].name"),
            Some(MilestoneKey::new(0, MilestoneField::Name))
        );
        assert_eq!(
            MilestoneKey::parse("milestone[12].duration"),
            Some(MilestoneKey::new(12, MilestoneField::Duration))
        );
        assert_eq!(
            MilestoneKey::parse("milestone[007].name"),
            Some(MilestoneKey::new(7, MilestoneField::Name))
        );
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(
            MilestoneKey::parse("milestone[0].names"),
            Some(MilestoneKey::new(0, MilestoneField::Name))
        );
        assert_eq!(
            MilestoneKey::parse("milestone[2].duration_days"),
            Some(MilestoneKey::new(2, MilestoneField::Duration))
        );
    }

    #[test]
    fn test_parse_rejects_other_keys() {
        for key in [
            "lineFormat",
            "startDate",
            "milestone[].name",
            "milestone[-1].name",
            "milestone[a].name",
            "milestone[0].label",
            "milestone[0].nam",
            "xmilestone[0].name",
            "milestone[0]name",
            "milestone[99999999999999999999999].name",
        ] {
            assert_eq!(MilestoneKey::parse(key), None, "{key}");
        }
    }

    #[test]
    fn test_display_matches_parse() {
        let key = MilestoneKey::new(3, MilestoneField::Duration);
        assert_eq!(key.to_string(), "milestone[3].duration");
        assert_eq!(MilestoneKey::parse(&key.to_string()), Some(key));
    }
}
