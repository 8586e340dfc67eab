use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;
use crate::utils::date::serializer;

// LoanEntity records a book borrowed by a patron for a bounded period. The
// loan collection is append-only; a returned book borrowed again produces a
// second record for the same book.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
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

impl LoanEntity {
    pub fn new(book_id: &str, patron_id: &str, loan_period_days: i64) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            loan_id: Uuid::new_v4().to_string(),
            book_id: book_id.to_string(),
            patron_id: patron_id.to_string(),
            loan_status: LoanStatus::Open,
            loaned_at: now,
            due_at: now + Duration::days(loan_period_days),
            returned_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.loan_status == LoanStatus::Open
    }
}

impl Identifiable for LoanEntity {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}
