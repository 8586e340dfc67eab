use crate::fines::domain::FineCalculator;
use crate::fines::domain::policy::{StandardFineCalculator, StudentFineCalculator, VipFineCalculator};
use crate::fines::FinePolicy;

pub fn create_fine_calculator(policy: FinePolicy) -> Box<dyn FineCalculator> {
    match policy {
        FinePolicy::Standard => Box::new(StandardFineCalculator),
        FinePolicy::Student => Box::new(StudentFineCalculator),
        FinePolicy::Vip => Box::new(VipFineCalculator),
    }
}
