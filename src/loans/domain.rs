use async_trait::async_trait;
use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::loans::dto::LoanDto;
use crate::patrons::domain::model::PatronEntity;

pub mod model;
pub mod service;

// IssueOutcome is the reported result of issue_loan. Rejection on an
// unavailable book is a soft outcome, not an error, and mutates nothing.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum IssueOutcome {
    Issued(LoanDto),
    Rejected,
}

// ReturnOutcome is the reported result of return_loan. An on-time return is
// a distinct outcome rather than a late return with a zero fine.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum ReturnOutcome {
    OnTime(LoanDto),
    Late {
        loan: LoanDto,
        days_late: i64,
        fine: i64,
    },
    AlreadyReturned(LoanDto),
}

#[async_trait]
pub trait LoanService: Sync + Send {
    async fn add_book(&self, book: BookEntity) -> LibraryResult<String>;
    async fn add_patron(&self, patron: PatronEntity) -> LibraryResult<String>;
    async fn issue_loan(&self, patron_id: &str, book_id: &str) -> LibraryResult<IssueOutcome>;
    async fn return_loan(&self, loan_id: &str) -> LibraryResult<ReturnOutcome>;
    async fn find_book(&self, book_id: &str) -> LibraryResult<BookEntity>;
    async fn find_loan(&self, loan_id: &str) -> LibraryResult<LoanDto>;
    async fn events(&self) -> LibraryResult<Vec<DomainEvent>>;
}
