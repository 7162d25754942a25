use anyhow::Result;
use async_trait::async_trait;
use serenity::all::{Cache, ChannelId, ChannelType, Context, Http};
use std::sync::Arc;
use tracing::warn;

/// The two things the bot needs from Discord: posting text and finding a
/// channel by name. Command and scheduler code only talk to this trait.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, channel: ChannelId, content: &str) -> Result<()>;

    /// First text channel called `name` in any guild the bot is in.
    async fn find_channel_by_name(&self, name: &str) -> Result<Option<ChannelId>>;
}

/// [`Messenger`] backed by serenity's HTTP client and cache.
#[derive(Clone)]
pub struct DiscordMessenger {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(Arc::clone(&ctx.http), Arc::clone(&ctx.cache))
    }
}

#[async_trait]
impl Messenger for DiscordMessenger {
    async fn send(&self, channel: ChannelId, content: &str) -> Result<()> {
        channel.say(&self.http, content).await?;
        Ok(())
    }

    /// Reads the cached guild first and only asks the API for guilds missing
    /// from the cache. A guild whose channels cannot be listed is skipped.
    async fn find_channel_by_name(&self, name: &str) -> Result<Option<ChannelId>> {
        for guild_id in self.cache.guilds() {
            let cached = self.cache.guild(guild_id).map(|guild| {
                text_channel_named(
                    guild.channels.values().map(|c| (c.id, c.kind, c.name.as_str())),
                    name,
                )
            });

            let found = match cached {
                Some(found) => found,
                None => match guild_id.channels(&self.http).await {
                    Ok(channels) => text_channel_named(
                        channels.values().map(|c| (c.id, c.kind, c.name.as_str())),
                        name,
                    ),
                    Err(e) => {
                        warn!("Could not list channels of guild {}: {}", guild_id, e);
                        continue;
                    }
                },
            };

            if found.is_some() {
                return Ok(found);
            }
        }
        Ok(None)
    }
}

/// First text channel called `name`; categories, voice channels and threads
/// with that name are passed over.
fn text_channel_named<'a>(
    channels: impl IntoIterator<Item = (ChannelId, ChannelType, &'a str)>,
    name: &str,
) -> Option<ChannelId> {
    channels
        .into_iter()
        .find(|(_, kind, channel_name)| *kind == ChannelType::Text && *channel_name == name)
        .map(|(id, _, _)| id)
}
