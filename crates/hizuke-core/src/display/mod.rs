//! Display formatting for terminal output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while wrapper types format collections and operation results. Everything
//! here produces markdown for the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (State, chain)  │───▶│ (ResolvedTable, │───▶│    Output       │
//! │                 │    │  EditResult)    │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: resolved-chain tables ([`ResolvedTable`])
//! - [`results`]: edit outcomes ([`EditResult`])
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod models;
pub mod results;

pub use collections::ResolvedTable;
pub use results::EditResult;
