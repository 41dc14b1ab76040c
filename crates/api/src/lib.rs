mod job_schedulers;
mod reminder;
mod shared;

pub use job_schedulers::{get_start_delay, run_send_reminders, start_send_reminders_job};
pub use reminder::send_event_reminders::{
    ReminderOutcome, RemindersReport, SendEventRemindersUseCase, SkipReason, UseCaseError,
    MAX_REMINDERS_FOR_CRON_CYCLE, REMINDERS_LOOKAHEAD_MILLIS, SENT_LOG_CUTOFF_MILLIS,
};
pub use shared::usecase::{execute, UseCase};

use lms_reminders_infra::RemindersContext;
use tracing::info;

pub struct Application {
    context: RemindersContext,
}

impl Application {
    pub fn new(context: RemindersContext) -> Self {
        Self { context }
    }

    /// Starts the job scheduler and keeps it running until the process
    /// receives a shutdown signal.
    pub async fn start(self) -> std::io::Result<()> {
        let job = start_send_reminders_job(self.context);
        tokio::signal::ctrl_c().await?;
        info!("Shutdown signal received, stopping the reminders job");
        job.abort();
        Ok(())
    }
}
