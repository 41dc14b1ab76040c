use crate::{
    reminder::send_event_reminders::SendEventRemindersUseCase, shared::usecase::execute,
};
use lms_reminders_infra::RemindersContext;
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{interval, sleep},
};
use tracing::info;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Runs the send reminders job at the start of the next minute and then every
/// `cron_interval_secs`. A run is awaited before the next tick so runs never overlap.
pub fn start_send_reminders_job(ctx: RemindersContext) -> JoinHandle<()> {
    tokio::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        sleep(Duration::from_secs(secs_to_next_run as u64)).await;

        let mut cron_interval = interval(Duration::from_secs(ctx.config.cron_interval_secs));
        loop {
            cron_interval.tick().await;
            run_send_reminders(&ctx).await;
        }
    })
}

pub async fn run_send_reminders(ctx: &RemindersContext) {
    // Errors are logged by `execute`
    if let Ok(report) = execute(SendEventRemindersUseCase::default(), ctx).await {
        info!(
            "Reminders job done. Sent: {}, skipped: {}, failed: {}",
            report.sent(),
            report.skipped(),
            report.failed()
        );
    }
}
