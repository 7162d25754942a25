use anyhow::Result;

use crate::bot::commands::Invocation;
use crate::bot::context::BotContext;
use crate::bot::messenger::Messenger;
use crate::utils::validation::{parse_verse_bound, resolve_chapter};

pub async fn handle_quran(
    ctx: &BotContext,
    messenger: &dyn Messenger,
    invocation: &Invocation,
    args: &[String],
) -> Result<()> {
    let chapter = resolve_chapter(args.first().map(String::as_str), &mut rand::thread_rng())?;
    let verse_start = parse_verse_bound(args.get(1).map(String::as_str));
    let verse_end = parse_verse_bound(args.get(2).map(String::as_str));

    let message = ctx.verses.chapter_message(chapter, verse_start, verse_end).await?;

    messenger.send(invocation.channel_id, &message.content()).await
}
