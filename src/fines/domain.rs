pub mod policy;

// FineCalculator is a pure function from days late to a fine amount. All
// variants must yield zero for a return that is not late.
pub trait FineCalculator: Sync + Send {
    fn calculate(&self, days_late: i64) -> i64;
}
