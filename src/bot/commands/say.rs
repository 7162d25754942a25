use anyhow::Result;

use crate::bot::commands::Invocation;
use crate::bot::messenger::Messenger;
use crate::utils::logging::log_validation_error;

pub const SAY_USAGE: &str = "Usage: say <text>";

pub async fn handle_say(messenger: &dyn Messenger, invocation: &Invocation, text: &str) -> Result<()> {
    if text.is_empty() {
        log_validation_error("say", "text", text, "missing required argument", invocation);
        return messenger.send(invocation.channel_id, SAY_USAGE).await;
    }

    let reply = format!("{}: {}", invocation.author_name, text);
    messenger.send(invocation.channel_id, &reply).await
}
