use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::{IssueOutcome, LoanService};

pub struct IssueLoanCommand {
    loan_service: Arc<dyn LoanService>,
}

impl IssueLoanCommand {
    pub fn new(loan_service: Arc<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueLoanCommandRequest {
    patron_id: String,
    book_id: String,
}

impl IssueLoanCommandRequest {
    pub fn new(patron_id: &str, book_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueLoanCommandResponse {
    pub outcome: IssueOutcome,
}

impl IssueLoanCommandResponse {
    pub fn new(outcome: IssueOutcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<IssueLoanCommandRequest, IssueLoanCommandResponse> for IssueLoanCommand {
    async fn execute(&self, req: IssueLoanCommandRequest) -> Result<IssueLoanCommandResponse, CommandError> {
        self.loan_service.issue_loan(req.patron_id.as_str(), req.book_id.as_str())
            .await.map_err(CommandError::from).map(IssueLoanCommandResponse::new)
    }
}
