use serenity::all::{ChannelId, Message, UserId};

use crate::bot::commands::{dispatch, Command, Invocation};
use crate::bot::context::BotContext;
use crate::bot::messenger::Messenger;

/// The parts of a gateway message the bot looks at.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub author_name: String,
    pub author_is_bot: bool,
    pub content: String,
}

impl From<&Message> for IncomingMessage {
    fn from(msg: &Message) -> Self {
        Self {
            channel_id: msg.channel_id,
            author_id: msg.author.id,
            author_name: msg.author.name.clone(),
            author_is_bot: msg.author.bot,
            content: msg.content.clone(),
        }
    }
}

/// Dispatches `msg` if it is a known command from a human. Returns whether a
/// command ran.
pub async fn message_handler(
    ctx: &BotContext,
    messenger: &dyn Messenger,
    bot_id: Option<UserId>,
    msg: IncomingMessage,
) -> bool {
    if msg.author_is_bot || Some(msg.author_id) == bot_id {
        return false;
    }

    let Some(command) = Command::parse(&msg.content, &ctx.command_prefix, bot_id) else {
        return false;
    };

    let invocation = Invocation {
        channel_id: msg.channel_id,
        author_id: msg.author_id.get(),
        author_name: msg.author_name,
    };
    dispatch(ctx, messenger, &invocation, command).await;
    true
}
