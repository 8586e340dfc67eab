use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub mod domain;
pub mod factory;

// FinePolicy selects which fine calculation variant the factory builds.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum FinePolicy {
    Standard,
    Student,
    Vip,
}

impl From<String> for FinePolicy {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Student" => FinePolicy::Student,
            "Vip" => FinePolicy::Vip,
            _ => FinePolicy::Standard,
        }
    }
}

impl Display for FinePolicy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FinePolicy::Standard => write!(f, "Standard"),
            FinePolicy::Student => write!(f, "Student"),
            FinePolicy::Vip => write!(f, "Vip"),
        }
    }
}
