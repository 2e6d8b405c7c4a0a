//! Collection wrapper types for displaying resolved chains.

use std::fmt;

use crate::chain::ResolvedMilestone;

/// Newtype wrapper that formats resolved milestones as a markdown table.
///
/// The offset column shows `-` at position 0, where the offset is never
/// applied.
///
/// # Examples
///
/// ```rust
/// use hizuke_core::{chain::resolve, display::ResolvedTable, codec::decode};
///
/// let state = decode("startDate=2024-01-10&milestone[0].name=Kickoff&milestone[1].name=Review&milestone[1].duration=5");
/// let output = ResolvedTable(&resolve(&state)).to_string();
/// assert!(output.contains("| 1 | Review | +5 | 2024-01-15 |"));
/// ```
pub struct ResolvedTable<'a>(pub &'a [ResolvedMilestone<'a>]);

impl ResolvedTable<'_> {
    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ResolvedTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No milestones.");
        }

        writeln!(f, "| # | Name | Offset | Date |")?;
        writeln!(f, "|---|------|--------|------|")?;
        for resolved in self.0 {
            let offset = match resolved.position {
                0 => "-".to_string(),
                _ => format!("{:+}", resolved.milestone.duration_days_from_previous_one),
            };
            writeln!(
                f,
                "| {} | {} | {offset} | {} |",
                resolved.position,
                resolved.milestone.name.replace('|', "\\|"),
                resolved.date.canonical()
            )?;
        }
        Ok(())
    }
}
