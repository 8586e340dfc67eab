use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::library::LoanStatus;
use crate::loans::domain::model::LoanEntity;
use crate::utils::date::serializer;

// LoanDto is the caller-facing snapshot of a loan record.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub book_id: String,
    pub patron_id: String,
    pub loan_status: LoanStatus,
    #[serde(with = "serializer")]
    pub loaned_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub due_at: NaiveDateTime,
    pub returned_at: Option<NaiveDateTime>,
}

impl From<&LoanEntity> for LoanDto {
    fn from(other: &LoanEntity) -> LoanDto {
        LoanDto {
            loan_id: other.loan_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            loan_status: other.loan_status,
            loaned_at: other.loaned_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
        }
    }
}

impl From<&LoanDto> for LoanEntity {
    fn from(other: &LoanDto) -> LoanEntity {
        LoanEntity {
            loan_id: other.loan_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            loan_status: other.loan_status,
            loaned_at: other.loaned_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
        }
    }
}
