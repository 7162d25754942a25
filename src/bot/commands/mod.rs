pub mod quran;
pub mod say;

use serenity::all::{ChannelId, UserId};
use std::fmt;
use tracing::error;

use crate::bot::context::BotContext;
use crate::bot::messenger::Messenger;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// Sent for any failure inside a command; details only go to the log.
pub const GENERIC_FAILURE: &str = "An error occurred while processing your request.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quran [chapter] [verse_start] [verse_end]`, arguments kept raw.
    Quran { args: Vec<String> },
    /// `say <text>`
    Say { text: String },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quran { .. } => "quran",
            Command::Say { .. } => "say",
        }
    }

    /// Parses a message addressed to the bot, either `<prefix><command>` or a
    /// mention followed by the command. Returns `None` for ordinary chat and
    /// for unknown commands.
    pub fn parse(content: &str, prefix: &str, bot_id: Option<UserId>) -> Option<Self> {
        let body = strip_invocation(content.trim_start(), prefix, bot_id)?;
        let (name, rest) = body
            .split_once(char::is_whitespace)
            .unwrap_or((body, ""));

        match name.to_lowercase().as_str() {
            "quran" => Some(Command::Quran {
                args: rest.split_whitespace().map(str::to_string).collect(),
            }),
            "say" => Some(Command::Say {
                text: rest.trim().to_string(),
            }),
            _ => None,
        }
    }
}

fn strip_invocation<'a>(content: &'a str, prefix: &str, bot_id: Option<UserId>) -> Option<&'a str> {
    if !prefix.is_empty() {
        if let Some(rest) = content.strip_prefix(prefix) {
            return Some(rest);
        }
    }

    let id = bot_id?;
    [format!("<@{}>", id), format!("<@!{}>", id)]
        .iter()
        .find_map(|mention| content.strip_prefix(mention.as_str()))
        .map(str::trim_start)
}

/// Who asked, and where to answer.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub channel_id: ChannelId,
    pub author_id: u64,
    pub author_name: String,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) in channel {}", self.author_name, self.author_id, self.channel_id)
    }
}

/// Runs one command. Errors never leave this function: they are logged and
/// the channel gets [`GENERIC_FAILURE`].
pub async fn dispatch(ctx: &BotContext, messenger: &dyn Messenger, invocation: &Invocation, command: Command) {
    let name = command.name();
    let args = match &command {
        Command::Quran { args } => args.join(" "),
        Command::Say { text } => text.clone(),
    };
    log_command_start(name, invocation, Some(&args));

    let result = match command {
        Command::Quran { args } => quran::handle_quran(ctx, messenger, invocation, &args).await,
        Command::Say { text } => say::handle_say(messenger, invocation, &text).await,
    };

    match result {
        Ok(()) => log_command_success(name, invocation, None),
        Err(e) => {
            log_command_error(name, invocation, &format!("{:?}", e));
            if let Err(send_err) = messenger.send(invocation.channel_id, GENERIC_FAILURE).await {
                error!("Failed to report error to channel {}: {}", invocation.channel_id, send_err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display_names_author_and_channel() {
        let invocation = Invocation {
            channel_id: ChannelId::new(555),
            author_id: 42,
            author_name: "amina".to_string(),
        };
        assert_eq!(invocation.to_string(), "amina(42) in channel 555");
    }
}
