use jiff::civil::date;
use proptest::prelude::*;

use super::*;
use crate::{
    date::is_date_shaped,
    models::{DayOffset, Milestone, MilestoneId},
};

fn pinned_codec() -> StateCodec {
    StateCodec::new().with_today(Some(date(2030, 6, 15)))
}

#[test]
fn test_decode_empty_query_uses_defaults() {
    let state = pinned_codec().decode("");
    assert_eq!(state.line_format, DEFAULT_LINE_FORMAT);
    assert_eq!(state.start_date, "2030-06-15");
    assert!(state.milestones.is_empty());
}

#[test]
fn test_decode_missing_start_date_falls_back_to_system_today() {
    let state = decode("lineFormat=%7Bdate%7D");
    assert!(is_date_shaped(&state.start_date));
    assert_eq!(state.start_date.len(), 10);
    assert_eq!(state.start_date, format_canonical(crate::date::today()));
}

#[test]
fn test_decode_malformed_start_date_falls_back() {
    for raw in ["yesterday", "2024-1-1", "2024-02-30", "x2024-01-10", "12024-01-10"] {
        let state = pinned_codec().decode(&format!("startDate={raw}"));
        assert_eq!(state.start_date, "2030-06-15", "{raw}");
    }
}

#[test]
fn test_decode_keeps_valid_start_date() {
    let state = pinned_codec().decode("startDate=2024-02-29");
    assert_eq!(state.start_date, "2024-02-29");
}

#[test]
fn test_decode_empty_line_format_is_kept() {
    let state = pinned_codec().decode("lineFormat=");
    assert_eq!(state.line_format, "");
}

#[test]
fn test_decode_custom_default_line_format() {
    let codec = pinned_codec().with_default_line_format("* {name}");
    assert_eq!(codec.decode("").line_format, "* {name}");
    assert_eq!(codec.decode("lineFormat=x").line_format, "x");
}

#[test]
fn test_decode_milestones_in_index_order() {
    let state = pinned_codec().decode(
        "milestone%5B1%5D.name=Review&milestone%5B1%5D.duration=5\
         &milestone%5B0%5D.name=Kickoff&milestone%5B0%5D.duration=0",
    );
    let names: Vec<_> = state.milestones.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Kickoff", "Review"]);
    assert_eq!(state.milestones[0].id, MilestoneId::Positional(0));
    assert_eq!(state.milestones[1].id, MilestoneId::Positional(1));
}

#[test]
fn test_decode_non_numeric_duration_is_not_a_number() {
    let state = pinned_codec().decode("milestone[0].name=a&milestone[0].duration=soon");
    assert_eq!(
        state.milestones[0].duration_days_from_previous_one,
        DayOffset::NotANumber
    );
}

#[test]
fn test_decode_ignores_unrelated_keys() {
    let state = pinned_codec().decode("utm_source=mail&milestone[0].label=x&milestone[0].name=a");
    assert_eq!(state.milestones.len(), 1);
    assert_eq!(state.milestones[0].name, "a");
}

#[test]
fn test_decode_accepts_keys_with_trailing_text() {
    let state = pinned_codec().decode("milestone[0].names=A&milestone[0].duration=0");
    assert_eq!(state.milestones.len(), 1);
    assert_eq!(state.milestones[0].name, "A");
}

#[test]
fn test_decode_drops_gaps() {
    let state = pinned_codec().decode("milestone[0].name=a&milestone[2].name=c");
    assert_eq!(state.milestones.len(), 2);
    assert_eq!(state.milestones[1].name, "c");
    assert_eq!(state.milestones[1].id, MilestoneId::Positional(2));
}

#[test]
fn test_decode_strict_rejects_gaps() {
    let err = pinned_codec()
        .decode_strict("milestone[0].name=a&milestone[2].name=c&milestone[5].name=f")
        .unwrap_err();
    assert_eq!(err, HizukeError::MilestoneGap { index: 1 });

    let err = decode_strict("milestone[1].name=b").unwrap_err();
    assert_eq!(err, HizukeError::MilestoneGap { index: 0 });
}

#[test]
fn test_decode_strict_accepts_contiguous_indices() {
    let state = pinned_codec()
        .decode_strict("milestone[0].name=a&milestone[1].name=b")
        .unwrap();
    assert_eq!(state.milestones.len(), 2);
}

#[test]
fn test_decode_full_url() {
    let state = pinned_codec().decode(
        "https://example.com/hizuke/?startDate=2024-01-10&milestone%5B0%5D.name=Go#top",
    );
    assert_eq!(state.start_date, "2024-01-10");
    assert_eq!(state.milestones[0].name, "Go");
}

#[test]
fn test_encode_then_decode_preserves_not_a_number() {
    let mut state = State::new(date(2024, 1, 10));
    state.milestones = vec![
        Milestone::new(MilestoneId::Positional(0), "a", DayOffset::Days(0)),
        Milestone::new(MilestoneId::Positional(1), "b", DayOffset::NotANumber),
    ];
    let decoded = pinned_codec().decode(&encode(&state));
    assert_eq!(decoded, state);
}

#[test]
fn test_round_trip_replaces_generated_ids_with_positions() {
    let mut state = State::new(date(2024, 1, 10));
    state.milestones = vec![
        Milestone::new(
            MilestoneId::Generated("18d$0.8".to_string()),
            "a",
            DayOffset::Days(0),
        ),
        Milestone::new(
            MilestoneId::Generated("18e$0.4".to_string()),
            "b",
            DayOffset::Days(3),
        ),
    ];
    let decoded = pinned_codec().decode(&encode(&state));
    assert!(decoded.eq_ignoring_ids(&state));
    assert_eq!(decoded.milestones[0].id, MilestoneId::Positional(0));
    assert_eq!(decoded.milestones[1].id, MilestoneId::Positional(1));
}

fn arb_offset() -> impl Strategy<Value = DayOffset> {
    prop_oneof![
        9 => any::<i64>().prop_map(DayOffset::Days),
        1 => Just(DayOffset::NotANumber),
    ]
}

fn arb_state() -> impl Strategy<Value = State> {
    (
        ".*",
        (1i16..=9999, 1i8..=12, 1i8..=28),
        prop::collection::vec((".*", arb_offset()), 0..8),
    )
        .prop_map(|(line_format, (y, m, d), milestones)| State {
            line_format,
            start_date: format_canonical(date(y, m, d)),
            milestones: milestones
                .into_iter()
                .enumerate()
                .map(|(i, (name, offset))| Milestone::new(MilestoneId::Positional(i), name, offset))
                .collect(),
        })
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(state in arb_state()) {
        let decoded = pinned_codec().decode(&encode(&state));
        prop_assert_eq!(decoded, state);
    }
}
