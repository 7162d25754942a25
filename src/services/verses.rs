use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::database::store::VerseStore;
use crate::utils::formatting::{format_verses, FormattedMessage};
use crate::utils::validation::random_chapter;
use crate::utils::verse_range::get_verse_markers;

/// The resolved request: which chapter, which edition, which slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSelection {
    pub chapter: i32,
    pub edition: String,
    pub verse_start: usize,
    pub verse_end: usize,
}

/// Fetch, slice and format. Shared by the `quran` command and the daily post.
#[derive(Clone)]
pub struct VerseService {
    store: Arc<dyn VerseStore>,
    edition: String,
    max_message_len: usize,
}

impl VerseService {
    pub fn new(store: Arc<dyn VerseStore>, edition: impl Into<String>, max_message_len: usize) -> Self {
        Self {
            store,
            edition: edition.into(),
            max_message_len,
        }
    }

    pub async fn chapter_message(
        &self,
        chapter: i32,
        verse_start: Option<i64>,
        verse_end: Option<i64>,
    ) -> Result<FormattedMessage> {
        let verses = self.store.chapter_verses(&self.edition, chapter).await?;
        let (start, end) = get_verse_markers(verses.len(), verse_start, verse_end);

        let selection = ChapterSelection {
            chapter,
            edition: self.edition.clone(),
            verse_start: start,
            verse_end: end,
        };
        debug!("Resolved {:?} from {} verses", selection, verses.len());

        Ok(format_verses(
            selection.chapter,
            &selection.edition,
            &verses[start..end],
            start,
            self.max_message_len,
        ))
    }

    /// Whole random chapter, as posted by the daily task.
    pub async fn random_chapter_message(&self) -> Result<(i32, FormattedMessage)> {
        let chapter = random_chapter(&mut rand::thread_rng());
        let message = self.chapter_message(chapter, None, None).await?;
        Ok((chapter, message))
    }
}
