use super::IMessageSender;
use anyhow::anyhow;
use lms_reminders_domain::ReminderMessage;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

/// Keeps every sent message in memory. Can be told to fail in order to
/// test how delivery failures are handled.
pub struct InMemoryMessageSender {
    sent: Mutex<Vec<ReminderMessage>>,
    failing: AtomicBool,
}

impl InMemoryMessageSender {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<ReminderMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl IMessageSender for InMemoryMessageSender {
    async fn send(&self, message: &ReminderMessage) -> anyhow::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow!("Message transport is unavailable"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
