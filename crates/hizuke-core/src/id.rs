//! Identifier generation for newly inserted milestones.

use jiff::Timestamp;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::models::MilestoneId;

/// Separator between the timestamp and random parts of a token.
pub const ID_SEPARATOR: char = '$';

/// Hex digits needed to spell out every bit of an `f64` in `[0, 1)`.
const MAX_FRACTION_DIGITS: usize = 14;

/// Produces [`MilestoneId::Generated`] tokens.
///
/// A token is the wall-clock time in milliseconds (base 16), a `$`, and a
/// random fraction in base 16, e.g. `18d2f3a4b10$0.4c1f09e2a7b3`. There is no
/// retry on collision; tokens only need to be distinct within one session's
/// list.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible sequences of
    /// random parts.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a fresh token.
    pub fn new_id(&mut self) -> MilestoneId {
        let millis = Timestamp::now().as_millisecond();
        let fraction: f64 = self.rng.random();
        MilestoneId::Generated(format!(
            "{millis:x}{ID_SEPARATOR}{}",
            hex_fraction(fraction)
        ))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Spells a value in `[0, 1)` in base 16, `0.` followed by the significant
/// hex digits.
fn hex_fraction(mut value: f64) -> String {
    if value <= 0.0 {
        return "0".to_string();
    }

    let mut out = String::from("0.");
    for _ in 0..MAX_FRACTION_DIGITS {
        value *= 16.0;
        let digit = value.floor();
        value -= digit;
        // `digit` is in 0..16 because `value` started below one.
        out.push(char::from_digit(digit as u32, 16).unwrap_or('0'));
        if value == 0.0 {
            break;
        }
    }
    out
}
