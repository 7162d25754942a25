pub mod message;
pub mod ready;

use serenity::all::{ActivityData, Context, EventHandler, Message, OnlineStatus, Ready, ResumedEvent};
use serenity::async_trait;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, info};

use crate::bot::context::BotContext;
use crate::bot::messenger::DiscordMessenger;

/// serenity entry point. Each gateway event kind maps to one function in this
/// module tree; none of them touch serenity types beyond the edges.
pub struct BotHandler {
    pub context: BotContext,
    daily_started: Arc<AtomicBool>,
}

impl BotHandler {
    pub fn new(context: BotContext) -> Self {
        Self {
            context,
            daily_started: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl EventHandler for BotHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Logged in as {} ({})", ready.user.name, ready.user.id);

        ctx.set_presence(
            Some(ActivityData::custom("Reading the Quran")),
            OnlineStatus::Online,
        );

        let messenger = Arc::new(DiscordMessenger::from_context(&ctx));
        ready::start_daily_post_once(&self.context, messenger, &self.daily_started);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let bot_id = ctx.cache.current_user().id;
        let messenger = DiscordMessenger::from_context(&ctx);
        message::message_handler(&self.context, &messenger, Some(bot_id), (&msg).into()).await;
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        debug!("Gateway session resumed");
    }
}
