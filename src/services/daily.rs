use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveTime;
use std::sync::Arc;
use tracing::{info, warn};

use crate::bot::messenger::Messenger;
use crate::services::scheduler::{Clock, RecurringTask, SystemClock, TaskAction};
use crate::services::verses::VerseService;
use crate::utils::datetime::{format_time_of_day, next_daily_occurrence};

/// Posts a random chapter to the channel called `channel_name`.
pub struct DailyPost {
    verses: VerseService,
    messenger: Arc<dyn Messenger>,
    channel_name: String,
}

impl DailyPost {
    pub fn new(verses: VerseService, messenger: Arc<dyn Messenger>, channel_name: impl Into<String>) -> Self {
        Self {
            verses,
            messenger,
            channel_name: channel_name.into(),
        }
    }
}

#[async_trait]
impl TaskAction for DailyPost {
    async fn fire(&self) -> Result<()> {
        // looked up on every run; the channel may be created or renamed later
        let Some(channel) = self.messenger.find_channel_by_name(&self.channel_name).await? else {
            warn!("Daily post skipped: no channel named '{}'", self.channel_name);
            return Ok(());
        };

        let (chapter, message) = self.verses.random_chapter_message().await?;
        self.messenger.send(channel, &message.content()).await?;

        info!("Daily post sent: chapter {} to #{} ({})", chapter, self.channel_name, channel);
        Ok(())
    }
}

/// The daily post on a fixed time of day.
pub fn daily_post_task<C: Clock>(
    clock: C,
    post_time: NaiveTime,
    action: DailyPost,
) -> RecurringTask<C, impl Fn(chrono::NaiveDateTime) -> chrono::NaiveDateTime + Send + Sync, DailyPost> {
    RecurringTask::new(
        format!("daily post at {}", format_time_of_day(&post_time)),
        clock,
        move |now| next_daily_occurrence(now, post_time),
        action,
    )
}

/// Spawns the daily post on the real clock.
pub fn spawn_daily_post(post_time: NaiveTime, action: DailyPost) -> tokio::task::JoinHandle<()> {
    let task = daily_post_task(SystemClock, post_time, action);
    tokio::spawn(task.run())
}
