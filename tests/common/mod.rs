#![allow(dead_code, clippy::unwrap_used)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use quran_bot::bot::messenger::Messenger;
use quran_bot::database::models::Verse;
use quran_bot::database::store::{MemoryVerseStore, VerseStore};
use serenity::all::ChannelId;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub const EDITION: &str = "eng-test";

/// Records everything sent instead of talking to Discord.
#[derive(Default)]
pub struct FakeMessenger {
    pub sent: Mutex<Vec<(ChannelId, String)>>,
    pub channels: HashMap<String, ChannelId>,
    pub fail_sends: bool,
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, name: &str, id: u64) -> Self {
        self.channels.insert(name.to_string(), ChannelId::new(id));
        self
    }

    pub fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, channel: u64) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(id, _)| id.get() == channel)
            .map(|(_, text)| text)
            .collect()
    }
}

#[async_trait]
impl Messenger for FakeMessenger {
    async fn send(&self, channel: ChannelId, content: &str) -> Result<()> {
        tokio::task::yield_now().await;
        if self.fail_sends {
            return Err(anyhow!("Missing Access"));
        }
        self.sent.lock().unwrap().push((channel, content.to_string()));
        Ok(())
    }

    async fn find_channel_by_name(&self, name: &str) -> Result<Option<ChannelId>> {
        Ok(self.channels.get(name).copied())
    }
}

/// Delays every read so concurrent commands overlap.
pub struct SlowStore<S> {
    pub inner: S,
    pub delay: Duration,
}

#[async_trait]
impl<S: VerseStore> VerseStore for SlowStore<S> {
    async fn chapter_verses(&self, edition: &str, chapter: i32) -> Result<Vec<Verse>> {
        tokio::time::sleep(self.delay).await;
        self.inner.chapter_verses(edition, chapter).await
    }

    async fn ping(&self) -> Result<()> {
        self.inner.ping().await
    }

    fn backend(&self) -> &'static str {
        "slow"
    }
}

/// Always fails, like a database that went away.
pub struct BrokenStore;

#[async_trait]
impl VerseStore for BrokenStore {
    async fn chapter_verses(&self, _edition: &str, _chapter: i32) -> Result<Vec<Verse>> {
        Err(anyhow!("pool timed out while waiting for an open connection"))
    }

    async fn ping(&self) -> Result<()> {
        Err(anyhow!("pool timed out while waiting for an open connection"))
    }

    fn backend(&self) -> &'static str {
        "broken"
    }
}

/// Chapter `n` gets `n % 7 + 3` verses reading "Chapter n verse v.", so every
/// chapter is present and tellable apart.
pub fn fixture_store() -> MemoryVerseStore {
    let mut store = MemoryVerseStore::new();
    for chapter in 1..=114 {
        let count = chapter % 7 + 3;
        let texts: Vec<String> = (1..=count)
            .map(|verse| format!("Chapter {} verse {}.", chapter, verse))
            .collect();
        store = store.with_chapter(EDITION, chapter, texts.as_slice());
    }
    store
}

/// Chapter 2 with enough text to overflow a Discord message.
pub fn long_chapter_store() -> MemoryVerseStore {
    let texts: Vec<String> = (1..=286)
        .map(|verse| format!("This is verse {} of the long chapter, with some words.", verse))
        .collect();
    MemoryVerseStore::new().with_chapter(EDITION, 2, texts.as_slice())
}
