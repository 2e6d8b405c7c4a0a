use hizuke_core::{IdGenerator, Session, SessionBuilder};
use jiff::civil::{date, Date};

/// The "today" every test session is pinned to.
#[allow(dead_code)]
pub fn pinned_today() -> Date {
    date(2030, 6, 15)
}

/// Helper function to create a session with a pinned clock and seeded ids
#[allow(dead_code)]
pub fn create_test_session(query: &str) -> Session {
    SessionBuilder::new()
        .with_query(Some(query))
        .with_today(Some(pinned_today()))
        .with_id_generator(IdGenerator::with_seed(42))
        .build()
        .expect("Failed to create session")
}
