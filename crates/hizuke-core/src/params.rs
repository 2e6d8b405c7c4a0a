//! Edit parameters for milestone chains.
//!
//! Every change a user can make to a session is one [`Edit`] value. Edits are
//! interface-agnostic: the CLI builds them from clap arguments, and any other
//! front end can build them from its own widgets. Applying an edit never
//! touches the current [`State`]; it returns the replacement.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │      Edit       │    │   new State     │
//! │  (clap derives) │───▶│ (plain values)  │───▶│ (old untouched) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use hizuke_core::{params::Edit, IdGenerator, State};
//! use jiff::civil::date;
//!
//! let mut ids = IdGenerator::new();
//! let empty = State::new(date(2024, 1, 10));
//!
//! let one = Edit::InsertFirst.apply(&empty, &mut ids, date(2024, 1, 10)).unwrap();
//! let named = Edit::Rename { index: 0, name: "Kickoff".to_string() }
//!     .apply(&one, &mut ids, date(2024, 1, 10))
//!     .unwrap();
//!
//! assert!(empty.milestones.is_empty());
//! assert_eq!(named.milestones[0].name, "Kickoff");
//! ```

use jiff::civil::Date;

use crate::{
    date::{format_canonical, parse_canonical},
    error::{HizukeError, Result},
    id::IdGenerator,
    models::{DayOffset, Milestone, State},
};

/// A single change to a session's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Insert a blank milestone at the head of the chain
    InsertFirst,
    /// Insert a blank milestone right after `index`
    InsertAfter { index: usize },
    /// Remove the milestone at `index`
    Remove { index: usize },
    /// Replace the name of the milestone at `index`
    Rename { index: usize, name: String },
    /// Replace the offset of the milestone at `index`
    SetDuration { index: usize, days: DayOffset },
    /// Replace the line template
    SetLineFormat { line_format: String },
    /// Move the anchor to a `yyyy-MM-dd` date
    SetStartDate { date: String },
    /// Move the anchor to today
    StartToday,
}

impl Edit {
    /// Builds the state that results from applying this edit to `state`.
    ///
    /// Inserted milestones get fresh ids from `ids`; `today` is the date
    /// [`Edit::StartToday`] moves the anchor to.
    ///
    /// # Errors
    ///
    /// Returns [`HizukeError::MilestoneIndexOutOfRange`] when an index-based
    /// edit addresses a missing position, and [`HizukeError::InvalidDate`]
    /// when [`Edit::SetStartDate`] carries something other than a real
    /// calendar date.
    pub fn apply(&self, state: &State, ids: &mut IdGenerator, today: Date) -> Result<State> {
        let mut next = state.clone();
        match self {
            Edit::InsertFirst => {
                next.milestones.insert(0, Milestone::empty(ids.new_id()));
            }
            Edit::InsertAfter { index } => {
                check_index(state, *index)?;
                next.milestones
                    .insert(index + 1, Milestone::empty(ids.new_id()));
            }
            Edit::Remove { index } => {
                check_index(state, *index)?;
                next.milestones.remove(*index);
            }
            Edit::Rename { index, name } => {
                check_index(state, *index)?;
                next.milestones[*index].name = name.clone();
            }
            Edit::SetDuration { index, days } => {
                check_index(state, *index)?;
                next.milestones[*index].duration_days_from_previous_one = *days;
            }
            Edit::SetLineFormat { line_format } => {
                next.line_format = line_format.clone();
            }
            Edit::SetStartDate { date } => {
                next.start_date = format_canonical(parse_canonical(date)?);
            }
            Edit::StartToday => {
                next.start_date = format_canonical(today);
            }
        }
        Ok(next)
    }

    /// Short description used in logs.
    pub fn describe(&self) -> String {
        match self {
            Edit::InsertFirst => "insert milestone at head".to_string(),
            Edit::InsertAfter { index } => format!("insert milestone after {index}"),
            Edit::Remove { index } => format!("remove milestone {index}"),
            Edit::Rename { index, .. } => format!("rename milestone {index}"),
            Edit::SetDuration { index, days } => format!("set milestone {index} offset to {days}"),
            Edit::SetLineFormat { .. } => "set line format".to_string(),
            Edit::SetStartDate { date } => format!("set start date to {date}"),
            Edit::StartToday => "set start date to today".to_string(),
        }
    }
}

fn check_index(state: &State, index: usize) -> Result<()> {
    let len = state.milestones.len();
    if index < len {
        Ok(())
    } else {
        Err(HizukeError::MilestoneIndexOutOfRange { index, len })
    }
}
