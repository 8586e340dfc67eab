use crate::gateway::email::EmailNotifier;
use crate::gateway::notify::Notifier;
use crate::gateway::sms::SmsNotifier;
use crate::gateway::NotifyVia;

pub fn create_notifier(via: NotifyVia) -> Box<dyn Notifier> {
    match via {
        NotifyVia::Email => Box::new(EmailNotifier),
        NotifyVia::Sms => Box::new(SmsNotifier),
    }
}
