//! Builds the Discord message for a run of verses.
//!
//! Verses go into a fenced code block under a one-line header. When the result
//! would exceed the length cap, the text is cut at the last full sentence and a
//! link to the rest of the chapter on quran.com is appended instead.

use crate::database::models::Verse;

pub const QURAN_WEB_BASE: &str = "https://quran.com";

const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    /// Header plus code block, closed.
    pub body: String,
    /// Present only when the verses were cut short.
    pub link: Option<String>,
}

impl FormattedMessage {
    /// The text to send, link included.
    pub fn content(&self) -> String {
        match &self.link {
            Some(link) => format!("{}\n{}", self.body, link_line(link)),
            None => self.body.clone(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.link.is_some()
    }
}

/// Deep link to `chapter` scrolled to the 0-based verse index `start`.
pub fn chapter_link(chapter: i32, start: usize) -> String {
    format!("{}/{}?startingVerse={}", QURAN_WEB_BASE, chapter, start)
}

fn link_line(link: &str) -> String {
    format!("Continue reading: <{}>", link)
}

fn header(chapter: i32, edition: &str, verses: &[Verse]) -> String {
    match (verses.first(), verses.last()) {
        (Some(first), Some(last)) if first.verse == last.verse => {
            format!("**Chapter {}, verse {}** ({})", chapter, first.verse, edition)
        }
        (Some(first), Some(last)) => {
            format!("**Chapter {}, verses {}-{}** ({})", chapter, first.verse, last.verse, edition)
        }
        _ => format!("**Chapter {}** ({})", chapter, edition),
    }
}

/// Longest prefix of `text` that is at most `max_chars` characters.
fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Formats `verses` (already sliced to the requested range, ascending) for
/// `chapter`. `start` is the 0-based index of the first verse in the slice and
/// only feeds the continuation link. The returned content never exceeds
/// `max_len` characters.
///
/// The header always names the requested range, also when the body is cut
/// short; the link marks that case. Caps below
/// [`MIN_MESSAGE_LEN`](crate::config::MIN_MESSAGE_LEN) may not fit the link and
/// get a plain hard cut instead.
pub fn format_verses(
    chapter: i32,
    edition: &str,
    verses: &[Verse],
    start: usize,
    max_len: usize,
) -> FormattedMessage {
    let opening = format!("{}\n{}\n", header(chapter, edition, verses), FENCE);
    let closing = format!("\n{}", FENCE);
    let text = verses
        .iter()
        .map(|v| v.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let full = format!("{}{}{}", opening, text, closing);
    if full.chars().count() <= max_len {
        return FormattedMessage { body: full, link: None };
    }

    let link = chapter_link(chapter, start);
    let reserved = opening.chars().count()
        + closing.chars().count()
        + 1
        + link_line(&link).chars().count();
    let kept = take_chars(&text, max_len.saturating_sub(reserved));
    let kept = match kept.rfind('.') {
        Some(period) => &kept[..=period],
        None => kept,
    };

    let message = FormattedMessage {
        body: format!("{}{}{}", opening, kept, closing),
        link: Some(link),
    };

    // only reachable with a cap too small for the header and link themselves
    let content = message.content();
    if content.chars().count() > max_len {
        return FormattedMessage {
            body: take_chars(&content, max_len).to_string(),
            link: None,
        };
    }

    message
}
