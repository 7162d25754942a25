use anyhow::{anyhow, Result};
use chrono::{Local, NaiveTime, Timelike};
use std::env;

/// Discord refuses messages longer than this many characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Smallest accepted cap; leaves room for the header, both fences and the
/// continuation link of a truncated message.
pub const MIN_MESSAGE_LEN: usize = 200;

pub const DEFAULT_EDITION: &str = "eng-abdelhaleem";
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 1900;
pub const DEFAULT_DAILY_CHANNEL: &str = "welcome";
pub const DEFAULT_COMMAND_PREFIX: &str = "/";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub edition: String,
    pub max_message_len: usize,
    pub daily_channel: String,
    pub post_time: NaiveTime,
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("DISCORD_TOKEN")
            .map_err(|_| anyhow!("DISCORD_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("DISCORD_TOKEN must be set"));
        }

        let database_url = database_url_from_env()?;

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let edition = non_empty_var("QURAN_EDITION")
            .unwrap_or_else(|| DEFAULT_EDITION.to_string());

        let max_message_len = match non_empty_var("MAX_MESSAGE_LEN") {
            Some(raw) => raw.trim()
                .parse::<usize>()
                .ok()
                .filter(|len| (MIN_MESSAGE_LEN..=DISCORD_MESSAGE_LIMIT).contains(len))
                .ok_or_else(|| {
                    anyhow!("Invalid MAX_MESSAGE_LEN (must be {}-{})", MIN_MESSAGE_LEN, DISCORD_MESSAGE_LIMIT)
                })?,
            None => DEFAULT_MAX_MESSAGE_LEN,
        };

        let daily_channel = non_empty_var("DAILY_CHANNEL")
            .unwrap_or_else(|| DEFAULT_DAILY_CHANNEL.to_string());

        let command_prefix = non_empty_var("COMMAND_PREFIX")
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());

        Ok(Config {
            discord_token: token,
            database_url,
            http_port,
            edition,
            max_message_len,
            daily_channel,
            post_time: post_time_from_env()?,
            command_prefix,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the `DB_*` parts.
fn database_url_from_env() -> Result<String> {
    if let Some(url) = non_empty_var("DATABASE_URL") {
        return Ok(url);
    }

    let host = non_empty_var("DB_HOST")
        .ok_or_else(|| anyhow!("DATABASE_URL or DB_HOST must be set"))?;
    let database = non_empty_var("DB_DATABASE")
        .ok_or_else(|| anyhow!("DB_DATABASE must be set"))?;
    let user = non_empty_var("DB_USER")
        .ok_or_else(|| anyhow!("DB_USER must be set"))?;
    let password = env::var("DB_PASSWORD").unwrap_or_default();
    let port: u16 = non_empty_var("DB_PORT")
        .unwrap_or_else(|| "5432".to_string())
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid DB_PORT"))?;

    Ok(format!("postgresql://{}:{}@{}:{}/{}", user, password, host, port, database))
}

/// Reads `POST_HOUR`/`POST_MINUTE`. With neither set the bot posts at the local
/// time it started. An hour on its own means the top of that hour; a minute on
/// its own keeps the start-up hour.
fn post_time_from_env() -> Result<NaiveTime> {
    let started = Local::now();

    let hour = match non_empty_var("POST_HOUR") {
        Some(raw) => raw.trim()
            .parse::<u32>()
            .ok()
            .filter(|h| *h < 24)
            .ok_or_else(|| anyhow!("Invalid POST_HOUR (must be 0-23)"))?,
        None => started.hour(),
    };
    let minute = match non_empty_var("POST_MINUTE") {
        Some(raw) => raw.trim()
            .parse::<u32>()
            .ok()
            .filter(|m| *m < 60)
            .ok_or_else(|| anyhow!("Invalid POST_MINUTE (must be 0-59)"))?,
        None if non_empty_var("POST_HOUR").is_some() => 0,
        None => started.minute(),
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| anyhow!("Invalid post time {:02}:{:02}", hour, minute))
}
