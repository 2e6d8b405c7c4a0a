//! Query string → [`State`](crate::models::State) reconstruction.
//!
//! Decoding runs in two passes. The first walks the query pairs and turns
//! every recognised milestone key into an `(index, field, value)` entry. The
//! second folds the entries into a dense, index-ordered milestone list and
//! reports the indices that never appeared.

use std::{collections::BTreeMap, ops::Range};

use log::debug;

use super::keys::{MilestoneField, MilestoneKey};
use crate::models::{DayOffset, Milestone, MilestoneId};

/// Decoded `(key, value)` pairs in query order.
pub(crate) type QueryPairs = Vec<(String, String)>;

/// Splits the query out of a full URL, a `?query`, or a bare query, and
/// percent-decodes its pairs.
pub(crate) fn query_pairs(input: &str) -> QueryPairs {
    let without_fragment = input.split_once('#').map_or(input, |(head, _)| head);
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains("://") => "",
        None => without_fragment,
    };

    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// First value stored under `key`; later duplicates are ignored.
pub(crate) fn first_value<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
}

#[derive(Debug, Default)]
struct PartialMilestone {
    name: Option<String>,
    duration: Option<DayOffset>,
}

/// Milestone entries grouped by index.
#[derive(Debug, Default)]
pub(crate) struct MilestoneEntries {
    by_index: BTreeMap<usize, PartialMilestone>,
}

impl MilestoneEntries {
    /// First pass: collect every milestone field present in the query.
    pub(crate) fn collect(pairs: &QueryPairs) -> Self {
        let mut entries = Self::default();
        for (key, value) in pairs {
            if let Some(parsed) = MilestoneKey::parse(key) {
                entries.insert(parsed, value);
            }
        }
        entries
    }

    fn insert(&mut self, key: MilestoneKey, value: &str) {
        let slot = self.by_index.entry(key.index).or_default();
        let already_set = match key.field {
            MilestoneField::Name => slot.name.is_some(),
            MilestoneField::Duration => slot.duration.is_some(),
        };
        if already_set {
            debug!("Ignoring repeated query key {key}");
            return;
        }
        match key.field {
            MilestoneField::Name => slot.name = Some(value.to_string()),
            MilestoneField::Duration => slot.duration = Some(DayOffset::parse(value)),
        }
    }

    /// Smallest index that is absent although a larger one is present.
    pub(crate) fn first_gap(&self) -> Option<usize> {
        self.gaps().first().map(|gap| gap.start)
    }

    /// Runs of absent indices below the largest present one, ascending.
    pub(crate) fn gaps(&self) -> Vec<Range<usize>> {
        let mut gaps = Vec::new();
        let mut expected = 0;
        for &index in self.by_index.keys() {
            if index > expected {
                gaps.push(expected..index);
            }
            expected = index.saturating_add(1);
        }
        gaps
    }

    /// Second pass: the present milestones in index order. Each keeps its
    /// query index as a positional id. A missing name is empty; a missing
    /// duration is not-a-number, so the chain breaks visibly from there.
    pub(crate) fn into_milestones(self) -> Vec<Milestone> {
        self.by_index
            .into_iter()
            .map(|(index, partial)| {
                Milestone::new(
                    MilestoneId::Positional(index),
                    partial.name.unwrap_or_default(),
                    partial.duration.unwrap_or(DayOffset::NotANumber),
                )
            })
            .collect()
    }
}
