pub mod pricing;
pub mod render;
pub mod signup;

pub use crate::domain::model::{PricingBreakdown, PricingRequest, SignupOutcome};
pub use crate::domain::ports::{PriceCalculator, Terminal};
pub use crate::utils::error::Result;
