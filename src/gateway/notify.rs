use async_trait::async_trait;

// Notifier delivers a message to a recipient identifier through a
// channel-specific transport. The boolean signals acceptance by the
// transport, not delivery. Variants must stay substitutable: same inputs,
// same meaning of the result, no extra preconditions.
#[async_trait]
pub trait Notifier: Sync + Send {
    async fn send(&self, message: &str, recipient: &str) -> bool;
}
