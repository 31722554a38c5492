use crate::domain::model::{PricingBreakdown, PricingRequest};
use crate::utils::error::Result;

pub trait PriceCalculator {
    fn compute(&self, plan: &str, feature_keys: &[String], member_count: u32)
        -> Result<PricingBreakdown>;

    fn price(&self, request: &PricingRequest) -> Result<PricingBreakdown> {
        self.compute(&request.plan, &request.feature_keys, request.member_count)
    }
}

/// Line-oriented user channel used by the signup flow.
pub trait Terminal {
    fn say(&mut self, line: &str) -> Result<()>;

    /// Shows `message` and reads one line, without the trailing newline.
    /// Returns `GymError::InputClosed` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<String>;
}
