//! Operation result types for edit feedback.

use std::fmt;

use crate::{chain::render, models::State};

/// Wrapper for displaying the outcome of an edit: what changed, the new
/// shareable link, and the rendered text.
pub struct EditResult<'a> {
    pub description: String,
    pub link: String,
    pub state: &'a State,
}

impl<'a> EditResult<'a> {
    /// Create a new edit result.
    pub fn new(description: impl Into<String>, link: impl Into<String>, state: &'a State) -> Self {
        Self {
            description: description.into(),
            link: link.into(),
            state,
        }
    }
}

impl fmt::Display for EditResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Edit applied: {}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- Link: {}", self.link)?;

        let text = render(self.state);
        if text.is_empty() {
            writeln!(f, "\nNo milestones.")?;
        } else {
            writeln!(f, "\n## Output")?;
            writeln!(f)?;
            writeln!(f, "```")?;
            writeln!(f, "{text}")?;
            writeln!(f, "```")?;
        }
        Ok(())
    }
}
