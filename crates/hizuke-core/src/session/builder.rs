//! Builder for creating and configuring Session instances.

use jiff::civil::Date;

use super::Session;
use crate::{codec::StateCodec, error::Result, id::IdGenerator, models::DEFAULT_LINE_FORMAT};

/// Builder for creating and configuring [`Session`] instances.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    query: String,
    today: Option<Date>,
    default_line_format: String,
    strict_indices: bool,
    ids: Option<IdGenerator>,
}

impl SessionBuilder {
    /// Creates a builder with default settings: an empty query, the system
    /// date, and the default line format.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            today: None,
            default_line_format: DEFAULT_LINE_FORMAT.to_string(),
            strict_indices: false,
            ids: None,
        }
    }

    /// Sets the query (or full URL) the session starts from.
    ///
    /// If not specified, the session starts from an empty query, i.e. every
    /// default.
    pub fn with_query<S: AsRef<str>>(mut self, query: Option<S>) -> Self {
        if let Some(query) = query {
            self.query = query.as_ref().to_string();
        }
        self
    }

    /// Pins "today" for the start-date fallback and [`crate::Edit::StartToday`].
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        self.today = today;
        self
    }

    /// Sets the line template used when the query has none.
    pub fn with_default_line_format(mut self, line_format: impl Into<String>) -> Self {
        self.default_line_format = line_format.into();
        self
    }

    /// Rejects queries with gaps in their milestone indices instead of
    /// dropping the holes.
    pub fn with_strict_indices(mut self, strict: bool) -> Self {
        self.strict_indices = strict;
        self
    }

    /// Supplies the generator for inserted milestone ids.
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Decodes the query and builds the session.
    ///
    /// # Errors
    ///
    /// Returns `HizukeError::MilestoneGap` if strict indices were requested
    /// and the query skips a milestone index.
    pub fn build(self) -> Result<Session> {
        let codec = StateCodec::new()
            .with_today(self.today)
            .with_default_line_format(self.default_line_format);

        let state = if self.strict_indices {
            codec.decode_strict(&self.query)?
        } else {
            codec.decode(&self.query)
        };

        Ok(Session::new(state, codec, self.ids.unwrap_or_default()))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
