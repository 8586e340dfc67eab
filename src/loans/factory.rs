use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::fines::factory::create_fine_calculator;
use crate::fines::FinePolicy;
use crate::gateway::factory::create_notifier;
use crate::gateway::NotifyVia;
use crate::loans::domain::LoanService;
use crate::loans::domain::service::LoanManager;

// Arc rather than Box because the in-memory state lives inside the manager
// and the command layer shares one instance.
pub fn create_loan_service(config: &Configuration, policy: FinePolicy,
                           via: NotifyVia) -> Arc<dyn LoanService> {
    let calculator = create_fine_calculator(policy);
    let notifier = create_notifier(via);
    Arc::new(LoanManager::new(config, calculator, notifier))
}
