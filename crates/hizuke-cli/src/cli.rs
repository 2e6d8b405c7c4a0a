//! Command-line argument wrappers and command handlers.
//!
//! Argument structs carry the clap derives and convert into plain core
//! values (`Edit`, `Milestone`), so `hizuke-core` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Edit / State → Session → Output
//! ```

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hizuke_core::{
    date::{format_canonical, parse_canonical},
    DayOffset, Edit, EditResult, HizukeError, IdGenerator, Milestone, ResolvedTable,
    Session, SessionBuilder, State,
};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

/// A query string, full link, or `-` to read one line from stdin
#[derive(Args)]
pub struct QueryArgs {
    /// Query string or link to read. Omit for an empty query (all defaults)
    pub query: Option<String>,
}

/// Print the decoded state
#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: QueryArgs,
    /// Print the state as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Build a query from scratch
///
/// Milestones are given in chain order as `NAME` or `NAME:DAYS`, where DAYS is
/// the offset from the previous milestone (ignored for the first one).
#[derive(Args)]
pub struct EncodeArgs {
    /// Line template with {date} and {name} placeholders
    #[arg(short, long)]
    pub line_format: Option<String>,
    /// Start date (yyyy-MM-dd). Defaults to today
    #[arg(short, long)]
    pub start_date: Option<String>,
    /// Milestone as NAME or NAME:DAYS; repeat in chain order
    #[arg(short, long = "milestone", value_name = "NAME[:DAYS]")]
    pub milestones: Vec<String>,
}

/// Apply one edit to a query
#[derive(Args)]
pub struct EditArgs {
    /// Query string or link to edit
    pub query: String,
    #[command(subcommand)]
    pub command: EditCommands,
}

#[derive(Subcommand)]
pub enum EditCommands {
    /// Insert a blank milestone at the head of the chain
    #[command(alias = "first")]
    InsertFirst,
    /// Insert a blank milestone after position INDEX
    #[command(alias = "after")]
    InsertAfter {
        #[arg(help = "0-based position to insert after")]
        index: usize,
    },
    /// Remove the milestone at position INDEX
    #[command(alias = "rm")]
    Remove {
        #[arg(help = "0-based position of the milestone to remove")]
        index: usize,
    },
    /// Rename the milestone at position INDEX
    Rename {
        #[arg(help = "0-based position of the milestone to rename")]
        index: usize,
        /// New name (may be empty)
        name: String,
    },
    /// Set the offset in days of the milestone at position INDEX
    Duration {
        #[arg(help = "0-based position of the milestone to change")]
        index: usize,
        /// Days after the previous milestone; may be negative
        #[arg(allow_hyphen_values = true)]
        days: String,
    },
    /// Replace the line template
    LineFormat {
        /// Template with {date} and {name} placeholders
        #[arg(allow_hyphen_values = true)]
        line_format: String,
    },
    /// Move the start date
    StartDate {
        /// New start date (yyyy-MM-dd)
        date: String,
    },
    /// Move the start date to today
    Today,
}

impl From<EditCommands> for Edit {
    fn from(val: EditCommands) -> Self {
        match val {
            EditCommands::InsertFirst => Edit::InsertFirst,
            EditCommands::InsertAfter { index } => Edit::InsertAfter { index },
            EditCommands::Remove { index } => Edit::Remove { index },
            EditCommands::Rename { index, name } => Edit::Rename { index, name },
            EditCommands::Duration { index, days } => Edit::SetDuration {
                index,
                days: DayOffset::parse(&days),
            },
            EditCommands::LineFormat { line_format } => Edit::SetLineFormat { line_format },
            EditCommands::StartDate { date } => Edit::SetStartDate { date },
            EditCommands::Today => Edit::StartToday,
        }
    }
}

/// Splits `NAME:DAYS` at its last colon. Without a colon the offset is zero.
///
/// Unlike a decoded query, DAYS typed on the command line must be a whole
/// integer.
fn parse_milestone_arg(arg: &str, ids: &mut IdGenerator) -> hizuke_core::Result<Milestone> {
    let Some((name, days)) = arg.rsplit_once(':') else {
        return Ok(Milestone::new(ids.new_id(), arg, DayOffset::Days(0)));
    };
    let days = days.trim().parse::<i64>().map_err(|_| {
        HizukeError::invalid_input("milestone")
            .with_reason(format!("'{days}' in '{arg}' is not a whole number of days"))
    })?;
    Ok(Milestone::new(ids.new_id(), name, DayOffset::Days(days)))
}

/// Settings shared by every command.
pub struct CliConfig {
    pub today: Option<Date>,
    pub base_url: Option<String>,
    pub strict: bool,
}

/// Command handlers.
pub struct Cli {
    config: CliConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: CliConfig, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    fn session(&self, query: Option<&str>) -> Result<Session> {
        let query = match query {
            Some("-") => Some(read_stdin_line()?),
            Some(query) => Some(query.to_string()),
            None => None,
        };
        SessionBuilder::new()
            .with_query(query)
            .with_today(self.config.today)
            .with_strict_indices(self.config.strict)
            .build()
            .context("Failed to decode query")
    }

    fn link(&self, session: &Session) -> String {
        match &self.config.base_url {
            Some(base) => session.share_url(base),
            None => format!("?{}", session.query()),
        }
    }

    /// Prints the rendered lines, nothing at all for an empty chain.
    pub fn render(&self, args: QueryArgs) -> Result<()> {
        let session = self.session(args.query.as_deref())?;
        let text = session.render();
        if !text.is_empty() {
            println!("{text}");
        }
        Ok(())
    }

    pub fn resolve(&self, args: QueryArgs) -> Result<()> {
        let session = self.session(args.query.as_deref())?;
        let resolved = session.resolve();
        self.renderer.render(&ResolvedTable(&resolved).to_string())
    }

    pub fn show(&self, args: ShowArgs) -> Result<()> {
        let session = self.session(args.input.query.as_deref())?;
        if args.json {
            let json = serde_json::to_string_pretty(session.state())
                .context("Failed to serialize state")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&session.state().to_string())
        }
    }

    pub fn encode(&self, args: EncodeArgs) -> Result<()> {
        let mut session = self.session(None)?;
        let mut state: State = session.state().clone();

        if let Some(line_format) = args.line_format {
            state.line_format = line_format;
        }
        if let Some(start_date) = args.start_date {
            let date = parse_canonical(&start_date).context("Invalid --start-date")?;
            state.start_date = format_canonical(date);
        }

        let mut ids = IdGenerator::new();
        state.milestones = args
            .milestones
            .iter()
            .map(|arg| parse_milestone_arg(arg, &mut ids))
            .collect::<hizuke_core::Result<Vec<_>>>()
            .context("Invalid --milestone")?;
        debug!("Encoding {} milestones", state.milestones.len());

        session.replace_state(state);
        println!("{}", self.link(&session));
        Ok(())
    }

    pub fn edit(&self, args: EditArgs) -> Result<()> {
        let mut session = self.session(Some(args.query.as_str()))?;
        let edit = Edit::from(args.command);
        session
            .apply(&edit)
            .with_context(|| format!("Failed to {}", edit.describe()))?;

        let link = self.link(&session);
        self.renderer
            .render(&EditResult::new(edit.describe(), link, session.state()).to_string())
    }
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read query from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
