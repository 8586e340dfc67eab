use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// LoanEventType enumerates the observable outcomes of the two manager
// operations.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanEventType {
    Issued,
    RejectedUnavailable,
    ReturnedOnTime,
    ReturnedLate,
    AlreadyReturned,
}

impl Display for LoanEventType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanEventType::Issued => write!(f, "loan_issued"),
            LoanEventType::RejectedUnavailable => write!(f, "loan_rejected_unavailable"),
            LoanEventType::ReturnedOnTime => write!(f, "loan_returned_on_time"),
            LoanEventType::ReturnedLate => write!(f, "loan_returned_late"),
            LoanEventType::AlreadyReturned => write!(f, "loan_already_returned"),
        }
    }
}

// DomainEvent abstracts one reported outcome on the observational side
// channel consumed by the presentation layer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: LoanEventType,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn outcome<T: Serialize>(kind: LoanEventType, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: kind.to_string(),
            key: key.to_string(),
            kind,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        })
    }
}
