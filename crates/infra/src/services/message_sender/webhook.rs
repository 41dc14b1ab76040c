use super::IMessageSender;
use lms_reminders_api_structs::{dtos::ReminderMessageDTO, send_reminder_message};
use lms_reminders_domain::ReminderMessage;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub url: String,
    pub key: String,
}

/// Delivers messages by posting them as json to the message endpoint of the host
pub struct WebhookMessageSender {
    client: Client,
    settings: WebhookSettings,
}

impl WebhookMessageSender {
    pub fn new(settings: WebhookSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }
}

#[async_trait::async_trait]
impl IMessageSender for WebhookMessageSender {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        let body: send_reminder_message::RequestBody = ReminderMessageDTO::new(message.clone());
        self.client
            .post(&self.settings.url)
            .header(send_reminder_message::WEBHOOK_KEY_HEADER, &self.settings.key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
