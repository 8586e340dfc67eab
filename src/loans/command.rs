pub mod issue_loan_cmd;
pub mod return_loan_cmd;
