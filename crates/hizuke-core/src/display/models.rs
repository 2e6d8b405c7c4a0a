//! Display implementations for domain models.
//!
//! Models format as markdown for the terminal renderer. The plain rendered
//! chain text is not a display of the model; that comes from
//! [`crate::chain::render`].

use std::fmt;

use crate::models::{Milestone, State};

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Milestone chain")?;
        writeln!(f)?;

        writeln!(f, "- Start date: {}", self.start_date)?;
        writeln!(f, "- Line format: `{}`", self.line_format)?;

        if self.milestones.is_empty() {
            writeln!(f, "\nNo milestones.")?;
        } else {
            writeln!(f, "\n## Milestones")?;
            writeln!(f)?;
            for (position, milestone) in self.milestones.iter().enumerate() {
                writeln!(f, "{position}. {milestone}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(unnamed)"
        } else {
            &self.name
        };
        write!(
            f,
            "{name} ({:+} days, id {})",
            self.duration_days_from_previous_one, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{DayOffset, Milestone, MilestoneId, State};

    #[test]
    fn test_state_display() {
        let mut state = State::new(date(2024, 1, 10));
        state.milestones = vec![
            Milestone::new(MilestoneId::Positional(0), "Kickoff", DayOffset::Days(0)),
            Milestone::new(
                MilestoneId::Generated("18d$0.8".to_string()),
                "",
                DayOffset::NotANumber,
            ),
        ];
        let output = state.to_string();

        assert!(output.starts_with("# Milestone chain\n"));
        assert!(output.contains("- Start date: 2024-01-10"));
        assert!(output.contains("- Line format: `- [ ] {date} {name}`"));
        assert!(output.contains("0. Kickoff (+0 days, id #0)"));
        assert!(output.contains("1. (unnamed) (NaN days, id 18d$0.8)"));
    }

    #[test]
    fn test_empty_state_display() {
        let output = State::new(date(2024, 1, 10)).to_string();
        assert!(output.contains("No milestones."));
        assert!(!output.contains("## Milestones"));
    }
}
