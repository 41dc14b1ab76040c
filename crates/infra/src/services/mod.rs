mod message_sender;

pub use message_sender::{
    IMessageSender, InMemoryMessageSender, WebhookMessageSender, WebhookSettings,
};
use std::sync::Arc;

/// Outgoing integrations with the host platform
#[derive(Clone)]
pub struct Services {
    pub message_sender: Arc<dyn IMessageSender>,
}
