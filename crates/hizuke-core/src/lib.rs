//! Core library for hizuke, the milestone date calculator.
//!
//! A hizuke session is a start date plus a chain of milestones, each some
//! number of days after the one before it. The whole session lives in a URL
//! query string, so a link is enough to bookmark or share it. This crate
//! provides:
//!
//! - [`codec`]: the query string ⇄ [`State`] mapping
//! - [`chain`]: date resolution and line rendering
//! - [`date`]: canonical `yyyy-MM-dd` helpers and day arithmetic
//! - [`IdGenerator`]: identities for newly inserted milestones
//! - [`Session`]: the store a front end edits through [`params::Edit`]
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use hizuke_core::{params::Edit, DayOffset, SessionBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_query(Some("https://example.com/?lineFormat=%7Bdate%7D+%7Bname%7D&startDate=2024-01-10"))
//!     .build()?;
//!
//! session.apply(&Edit::InsertFirst)?;
//! session.apply(&Edit::InsertAfter { index: 0 })?;
//! session.apply(&Edit::Rename { index: 0, name: "Kickoff".to_string() })?;
//! session.apply(&Edit::Rename { index: 1, name: "Review".to_string() })?;
//! session.apply(&Edit::SetDuration { index: 1, days: DayOffset::Days(5) })?;
//!
//! assert_eq!(session.render(), "01/10 Kickoff\n01/15 Review");
//! println!("Share: {}", session.share_url("https://example.com/"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod chain;
pub mod codec;
pub mod date;
pub mod display;
pub mod error;
pub mod id;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use chain::{render, resolve, ResolvedDate, ResolvedMilestone};
pub use codec::{decode, decode_strict, encode, StateCodec};
pub use display::{EditResult, ResolvedTable};
pub use error::{HizukeError, Result};
pub use id::IdGenerator;
pub use models::{DayOffset, Milestone, MilestoneId, State, DEFAULT_LINE_FORMAT};
pub use params::Edit;
pub use session::{Session, SessionBuilder};
