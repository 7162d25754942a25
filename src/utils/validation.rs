use anyhow::{anyhow, Result};
use rand::Rng;
use std::ops::RangeInclusive;

/// Chapters that exist.
pub const CHAPTERS: RangeInclusive<i32> = 1..=114;

/// Chapters picked from when none (or an out-of-range one) is given.
pub const RANDOM_CHAPTERS: RangeInclusive<i32> = 67..=114;

pub fn random_chapter<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(RANDOM_CHAPTERS)
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Picks the chapter for a `quran` request.
///
/// A missing argument, or an integer outside 1-114, falls back to a random
/// chapter. Anything that is not an integer at all is an error.
pub fn resolve_chapter<R: Rng + ?Sized>(arg: Option<&str>, rng: &mut R) -> Result<i32> {
    let Some(raw) = arg.map(str::trim) else {
        return Ok(random_chapter(rng));
    };

    match raw.parse::<i64>() {
        Ok(n) if n >= i64::from(*CHAPTERS.start()) && n <= i64::from(*CHAPTERS.end()) => Ok(n as i32),
        Ok(_) => Ok(random_chapter(rng)),
        // too many digits for i64 is still just out of range
        Err(_) if is_integer_literal(raw) => Ok(random_chapter(rng)),
        Err(_) => Err(anyhow!("Invalid chapter argument '{}'", raw)),
    }
}

/// Verse bounds are lenient: a value that is not an integer counts as absent.
pub fn parse_verse_bound(arg: Option<&str>) -> Option<i64> {
    arg.and_then(|raw| raw.trim().parse::<i64>().ok())
}
