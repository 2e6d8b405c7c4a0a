//! Data models for milestone chains.
//!
//! A [`State`] is everything a shared link carries: the line template, the
//! anchor date, and the ordered [`Milestone`] list. Milestone offsets are
//! [`DayOffset`] values so that not-a-number input from a hand-edited query
//! survives until rendering, and milestone identity is a [`MilestoneId`] that
//! keeps decoded positions apart from freshly generated tokens.
//!
//! # Examples
//!
//! ```rust
//! use hizuke_core::models::{DayOffset, Milestone, MilestoneId, State};
//! use jiff::civil::date;
//!
//! let mut state = State::new(date(2024, 1, 10));
//! state.milestones.push(Milestone::new(
//!     MilestoneId::Positional(0),
//!     "Kickoff",
//!     DayOffset::Days(0),
//! ));
//! assert_eq!(state.start_date, "2024-01-10");
//! assert_eq!(state.line_format, "- [ ] {date} {name}");
//! ```

pub mod milestone;
pub mod state;


pub use milestone::{DayOffset, Milestone, MilestoneId};
pub use state::{State, DEFAULT_LINE_FORMAT};
