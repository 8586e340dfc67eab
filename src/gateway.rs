use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod notify;
pub mod email;
pub mod sms;
pub mod factory;

// NotifyVia selects which notification channel the factory builds.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum NotifyVia {
    Email,
    Sms,
}

impl Display for NotifyVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NotifyVia::Email => write!(f, "Email"),
            NotifyVia::Sms => write!(f, "Sms"),
        }
    }
}
