use crate::fines::domain::FineCalculator;

const STANDARD_RATE: i64 = 10;
const STUDENT_RATE: i64 = 5;

#[derive(Debug)]
pub struct StandardFineCalculator;

impl FineCalculator for StandardFineCalculator {
    fn calculate(&self, days_late: i64) -> i64 {
        days_late * STANDARD_RATE
    }
}

#[derive(Debug)]
pub struct StudentFineCalculator;

impl FineCalculator for StudentFineCalculator {
    fn calculate(&self, days_late: i64) -> i64 {
        days_late * STUDENT_RATE
    }
}

// VIP patrons never pay a fine, no matter how late.
#[derive(Debug)]
pub struct VipFineCalculator;

impl FineCalculator for VipFineCalculator {
    fn calculate(&self, _days_late: i64) -> i64 {
        0
    }
}
