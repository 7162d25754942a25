//! Read-only access to verses.
//!
//! Handlers and the daily post only see [`VerseStore`], so tests can swap the
//! PostgreSQL pool for [`MemoryVerseStore`].

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

use crate::database::connection::DatabaseManager;
use crate::database::models::Verse;
use crate::utils::logging::{log_database_error, log_database_operation};

#[async_trait]
pub trait VerseStore: Send + Sync {
    /// Every verse of `chapter` in `edition`, ascending by verse number.
    async fn chapter_verses(&self, edition: &str, chapter: i32) -> Result<Vec<Verse>>;

    /// Cheap round trip used by the health endpoints.
    async fn ping(&self) -> Result<()>;

    fn backend(&self) -> &'static str;
}

#[async_trait]
impl VerseStore for DatabaseManager {
    async fn chapter_verses(&self, edition: &str, chapter: i32) -> Result<Vec<Verse>> {
        let details = format!("edition={} chapter={}", edition, chapter);
        log_database_operation("SELECT", "verse", Some(&details));

        match Verse::find_by_chapter(&self.pool, edition, chapter).await {
            Ok(verses) => Ok(verses),
            Err(e) => {
                log_database_error("SELECT", "verse", &e.to_string(), Some(&details));
                Err(e.into())
            }
        }
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Verses held in memory, keyed by (edition, chapter).
#[derive(Debug, Default, Clone)]
pub struct MemoryVerseStore {
    chapters: HashMap<(String, i32), Vec<Verse>>,
}

impl MemoryVerseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, verse: Verse) {
        let verses = self
            .chapters
            .entry((verse.edition_name.clone(), verse.chapter))
            .or_default();
        verses.push(verse);
        verses.sort_by_key(|v| v.verse);
    }

    /// Fills a chapter with `texts`, numbering verses from 1.
    pub fn with_chapter<S: AsRef<str>>(mut self, edition: &str, chapter: i32, texts: &[S]) -> Self {
        for (index, text) in texts.iter().enumerate() {
            self.insert(Verse::new(edition, chapter, index as i32 + 1, text.as_ref()));
        }
        self
    }
}

#[async_trait]
impl VerseStore for MemoryVerseStore {
    async fn chapter_verses(&self, edition: &str, chapter: i32) -> Result<Vec<Verse>> {
        Ok(self
            .chapters
            .get(&(edition.to_string(), chapter))
            .cloned()
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_orders_by_verse_number() {
        let mut store = MemoryVerseStore::new();
        store.insert(Verse::new("ed", 1, 3, "third"));
        store.insert(Verse::new("ed", 1, 1, "first"));
        store.insert(Verse::new("ed", 1, 2, "second"));

        let verses = store.chapter_verses("ed", 1).await.unwrap();
        let numbers: Vec<i32> = verses.iter().map(|v| v.verse).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_memory_store_separates_editions() {
        let store = MemoryVerseStore::new()
            .with_chapter("a", 112, &["one"])
            .with_chapter("b", 112, &["uno", "dos"]);

        assert_eq!(store.chapter_verses("a", 112).await.unwrap().len(), 1);
        assert_eq!(store.chapter_verses("b", 112).await.unwrap().len(), 2);
        assert!(store.chapter_verses("c", 112).await.unwrap().is_empty());
    }
}
