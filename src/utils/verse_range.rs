/// Turns user-supplied verse bounds into a 0-based half-open `(start, end)`
/// range over a chapter with `total_verses` verses.
///
/// Bounds are 1-based. Anything out of range is clamped rather than rejected:
/// a missing, non-positive or too large start becomes 0, and a missing end,
/// one not past the start, or one beyond the chapter becomes `total_verses`.
/// An accepted end maps to `verse_end - 1`.
///
/// # Example
/// ```
/// use quran_bot::utils::verse_range::get_verse_markers;
///
/// assert_eq!(get_verse_markers(10, None, None), (0, 10));
/// assert_eq!(get_verse_markers(10, Some(3), Some(5)), (2, 4));
/// ```
pub fn get_verse_markers(
    total_verses: usize,
    verse_start: Option<i64>,
    verse_end: Option<i64>,
) -> (usize, usize) {
    let total = total_verses as i64;

    let start = match verse_start {
        Some(s) if s > 0 && s < total => s - 1,
        _ => 0,
    };

    let end = match verse_end {
        Some(e) if e > start && e - 1 <= total - 1 => e - 1,
        _ => total,
    };

    // both bounds are already inside 0..=total; keep start <= end regardless
    let start = start.min(end) as usize;
    (start, end as usize)
}
