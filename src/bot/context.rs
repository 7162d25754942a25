use chrono::NaiveTime;

use crate::config::Config;
use crate::services::verses::VerseService;

/// Where and when the daily chapter goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySchedule {
    pub channel_name: String,
    pub post_time: NaiveTime,
}

/// Everything a command handler needs, built once in `main` and shared.
#[derive(Clone)]
pub struct BotContext {
    pub verses: VerseService,
    pub command_prefix: String,
    pub daily: DailySchedule,
}

impl BotContext {
    pub fn new(verses: VerseService, config: &Config) -> Self {
        Self {
            verses,
            command_prefix: config.command_prefix.clone(),
            daily: DailySchedule {
                channel_name: config.daily_channel.clone(),
                post_time: config.post_time,
            },
        }
    }
}
