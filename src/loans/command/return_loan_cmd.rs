use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::loans::domain::{LoanService, ReturnOutcome};

pub struct ReturnLoanCommand {
    loan_service: Arc<dyn LoanService>,
}

impl ReturnLoanCommand {
    pub fn new(loan_service: Arc<dyn LoanService>) -> Self {
        Self {
            loan_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnLoanCommandRequest {
    loan_id: String,
}

impl ReturnLoanCommandRequest {
    pub fn new(loan_id: &str) -> Self {
        Self {
            loan_id: loan_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnLoanCommandResponse {
    pub outcome: ReturnOutcome,
}

impl ReturnLoanCommandResponse {
    pub fn new(outcome: ReturnOutcome) -> Self {
        Self {
            outcome,
        }
    }
}

#[async_trait]
impl Command<ReturnLoanCommandRequest, ReturnLoanCommandResponse> for ReturnLoanCommand {
    async fn execute(&self, req: ReturnLoanCommandRequest) -> Result<ReturnLoanCommandResponse, CommandError> {
        self.loan_service.return_loan(req.loan_id.as_str())
            .await.map_err(CommandError::from).map(ReturnLoanCommandResponse::new)
    }
}
