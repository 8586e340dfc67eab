use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by domain entities
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the loan simulator
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub loan_period_days: i64,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            loan_period_days: 14,
        }
    }

    // negative periods produce loans that are already overdue, which the
    // scenario tests rely on
    pub fn with_loan_period(branch_id: &str, loan_period_days: i64) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            loan_period_days,
        }
    }
}
