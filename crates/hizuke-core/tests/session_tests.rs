mod common;

use common::{create_test_session, pinned_today};
use hizuke_core::{
    date::format_canonical, DayOffset, Edit, HizukeError, MilestoneId, SessionBuilder,
};

#[test]
#[allow(clippy::too_many_lines)]
fn test_complete_editing_workflow() {
    let mut session = create_test_session("lineFormat=%7Bdate%7D+%7Bname%7D&startDate=2024-01-10");

    // Build a three-step chain the way a user would
    session.apply(&Edit::InsertFirst).expect("insert first");
    session
        .apply(&Edit::InsertAfter { index: 0 })
        .expect("insert after 0");
    session
        .apply(&Edit::InsertAfter { index: 1 })
        .expect("insert after 1");

    for (index, name) in ["Plan", "Build", "Ship"].into_iter().enumerate() {
        session
            .apply(&Edit::Rename {
                index,
                name: name.to_string(),
            })
            .expect("rename");
    }
    session
        .apply(&Edit::SetDuration {
            index: 1,
            days: DayOffset::Days(7),
        })
        .expect("set duration");
    session
        .apply(&Edit::SetDuration {
            index: 2,
            days: DayOffset::Days(21),
        })
        .expect("set duration");

    assert_eq!(session.render(), "01/10 Plan\n01/17 Build\n02/07 Ship");

    // Every inserted milestone has its own generated id
    let ids: Vec<_> = session
        .state()
        .milestones
        .iter()
        .map(|m| m.id.clone())
        .collect();
    assert!(ids.iter().all(|id| matches!(id, MilestoneId::Generated(_))));
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);

    // Dropping the middle step pulls Ship up against Plan
    session.apply(&Edit::Remove { index: 1 }).expect("remove");
    assert_eq!(session.render(), "01/10 Plan\n01/31 Ship");

    // The query alone restores the session
    let reloaded = create_test_session(session.query());
    assert!(reloaded.state().eq_ignoring_ids(session.state()));
    assert_eq!(reloaded.render(), session.render());
}

#[test]
fn test_moving_the_anchor_moves_the_whole_chain() {
    let mut session = create_test_session(
        "lineFormat=%7Bdate%7D&startDate=2024-01-10&milestone[0].name=a&milestone[1].duration=2",
    );
    session
        .apply(&Edit::SetStartDate {
            date: "2024-02-28".to_string(),
        })
        .expect("set start date");
    assert_eq!(session.render(), "02/28\n03/01");

    session.apply(&Edit::StartToday).expect("start today");
    assert_eq!(session.state().start_date, format_canonical(pinned_today()));
    assert_eq!(session.render(), "06/15\n06/17");
}

#[test]
fn test_invalid_edits_are_rejected() {
    let mut session = create_test_session("startDate=2024-01-10&milestone[0].name=a");
    let before = session.state().clone();

    let err = session
        .apply(&Edit::SetStartDate {
            date: "2024-13-01".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, HizukeError::InvalidDate { .. }));

    let err = session.apply(&Edit::InsertAfter { index: 1 }).unwrap_err();
    assert_eq!(err, HizukeError::MilestoneIndexOutOfRange { index: 1, len: 1 });

    assert_eq!(session.state(), &before);
}

#[test]
fn test_default_line_format_override() {
    let session = SessionBuilder::new()
        .with_query(Some("startDate=2024-01-10&milestone[0].name=a"))
        .with_default_line_format("* {name} ({date})")
        .build()
        .expect("Failed to create session");
    assert_eq!(session.render(), "* a (01/10)");
    assert!(session.query().starts_with("lineFormat=*+%7Bname%7D+%28%7Bdate%7D%29&"));
}

#[test]
fn test_system_today_fallback() {
    let session = SessionBuilder::new()
        .with_query(None::<&str>)
        .build()
        .expect("Failed to create session");
    let start = &session.state().start_date;
    assert_eq!(start.len(), 10);
    assert!(start.chars().enumerate().all(|(i, c)| match i {
        4 | 7 => c == '-',
        _ => c.is_ascii_digit(),
    }));
}
