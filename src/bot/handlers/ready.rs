use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::bot::context::BotContext;
use crate::bot::messenger::Messenger;
use crate::services::daily::{spawn_daily_post, DailyPost};
use crate::utils::datetime::format_time_of_day;
use crate::utils::logging::log_system_event;

/// Starts the daily post the first time the bot is ready. Later `ready`
/// events (gateway reconnects) find `started` set and do nothing. Returns
/// whether the task was spawned by this call.
pub fn start_daily_post_once(ctx: &BotContext, messenger: Arc<dyn Messenger>, started: &AtomicBool) -> bool {
    if started
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return false;
    }

    let schedule = &ctx.daily;
    let action = DailyPost::new(ctx.verses.clone(), messenger, schedule.channel_name.clone());
    spawn_daily_post(schedule.post_time, action);

    log_system_event(
        "Daily post scheduled",
        Some(&format!(
            "#{} at {} local time",
            schedule.channel_name,
            format_time_of_day(&schedule.post_time)
        )),
    );
    true
}
