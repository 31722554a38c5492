use crate::utils::error::{GymError, Result};
use crate::utils::validation::{self, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub plan: String,
    #[serde(default)]
    pub feature_keys: Vec<String>,
    pub member_count: u32,
}

impl PricingRequest {
    pub fn new(plan: impl Into<String>, feature_keys: Vec<String>, member_count: u32) -> Self {
        Self {
            plan: plan.into(),
            feature_keys,
            member_count,
        }
    }
}

// Caller-side checks; the calculator itself only checks catalog membership.
impl Validate for PricingRequest {
    fn validate(&self) -> Result<()> {
        if self.member_count < 1 {
            return Err(GymError::InvalidMemberCount {
                count: i64::from(self.member_count),
            });
        }
        validation::validate_non_empty_string("plan", &self.plan)?;
        if self.feature_keys.iter().any(|key| key.trim().is_empty()) {
            return Err(GymError::InvalidSelection {
                message: "empty feature key".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Per-person subtotal times member count, before any adjustment.
    pub gross_total: Decimal,
    pub surcharge: Decimal,
    pub group_discount: Decimal,
    pub special_discount: Decimal,
    /// Display names in the order the keys were given.
    pub feature_names: Vec<String>,
    pub final_cost: u64,
}

#[derive(Debug)]
pub enum SignupOutcome {
    Confirmed {
        total: u64,
        breakdown: PricingBreakdown,
    },
    Cancelled,
    Failed(GymError),
}

impl SignupOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SignupOutcome::Confirmed { .. })
    }
}
