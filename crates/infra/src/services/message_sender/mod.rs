mod inmemory;
mod webhook;

pub use inmemory::InMemoryMessageSender;
use lms_reminders_domain::ReminderMessage;
pub use webhook::{WebhookMessageSender, WebhookSettings};

/// Hands a `ReminderMessage` over to the message transport of the host platform
#[async_trait::async_trait]
pub trait IMessageSender: Send + Sync {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()>;
}
