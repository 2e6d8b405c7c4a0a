//! [`State`] → query string serialization.

use super::keys::{MilestoneField, MilestoneKey, LINE_FORMAT_KEY, START_DATE_KEY};
use crate::models::State;

/// Serializes a state as `application/x-www-form-urlencoded` text.
///
/// Keys come out in a fixed order: `lineFormat`, `startDate`, then each
/// milestone's name and duration by position. Milestone ids are not written;
/// a milestone's position is its only persisted identity.
pub fn encode(state: &State) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair(LINE_FORMAT_KEY, &state.line_format);
    query.append_pair(START_DATE_KEY, &state.start_date);

    for (index, milestone) in state.milestones.iter().enumerate() {
        query.append_pair(
            &MilestoneKey::new(index, MilestoneField::Name).to_string(),
            &milestone.name,
        );
        query.append_pair(
            &MilestoneKey::new(index, MilestoneField::Duration).to_string(),
            &milestone.duration_days_from_previous_one.to_string(),
        );
    }
    query.finish()
}
