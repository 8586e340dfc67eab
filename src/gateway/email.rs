use async_trait::async_trait;
use tracing::log::info;
use crate::gateway::notify::Notifier;

// EmailNotifier writes the message to the structured log in place of an
// actual mail transport. It always accepts.
#[derive(Debug)]
pub struct EmailNotifier;

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, message: &str, recipient: &str) -> bool {
        info!("email to {}: {}", recipient, message);
        true
    }
}
