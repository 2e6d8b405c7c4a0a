use clap::{Parser, Subcommand};
use hizuke_core::date::parse_canonical;
use jiff::civil::Date;

use crate::cli::{EditArgs, EncodeArgs, QueryArgs, ShowArgs};

/// Milestone date calculator driven by shareable query strings
///
/// Hizuke turns a start date and a chain of day offsets into a list of dated
/// lines. The whole session lives in a URL query string: pass a query (or a
/// full link) to render it, or apply an edit to get the next link.
#[derive(Parser)]
#[command(version, about, name = "hizuke")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Date to treat as today (yyyy-MM-dd). Defaults to the system date
    #[arg(long, global = true, value_parser = parse_date)]
    pub today: Option<Date>,

    /// Base URL for printed links. Without it links are printed as `?query`
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Reject queries whose milestone indices skip a number
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the hizuke CLI
///
/// - `render`, `resolve`, `show`: read a query and print it in some form
/// - `encode`: build a query from scratch
/// - `edit`: apply one change to a query and print the new link
#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendered lines for a query
    #[command(alias = "r")]
    Render(QueryArgs),
    /// Print a table of each milestone's resolved date
    #[command(alias = "t")]
    Resolve(QueryArgs),
    /// Print the decoded state
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Build a query from a start date and milestones
    #[command(alias = "n")]
    Encode(EncodeArgs),
    /// Apply one edit to a query
    #[command(alias = "e")]
    Edit(EditArgs),
}

fn parse_date(text: &str) -> Result<Date, String> {
    parse_canonical(text).map_err(|e| e.to_string())
}
