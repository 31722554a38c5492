use crate::domain::catalog::{
    special_offer_for, Feature, Plan, GROUP_DISCOUNT_MIN_MEMBERS, GROUP_DISCOUNT_RATE,
    PREMIUM_SURCHARGE_RATE,
};
use crate::domain::model::PricingBreakdown;
use crate::domain::ports::PriceCalculator;
use crate::utils::error::{GymError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Prices a signup against the fixed catalogs.
///
/// Stages run in order, each on the previous running total: gross total,
/// premium surcharge, group discount, special offer, then floor at zero and
/// truncate. Feature keys are checked in input order and the first unknown key
/// fails the whole request.
pub fn compute(
    plan_name: &str,
    feature_keys: &[String],
    member_count: u32,
) -> Result<(u64, PricingBreakdown)> {
    let plan = Plan::find(plan_name).ok_or_else(|| GymError::InvalidPlan {
        plan: plan_name.to_string(),
    })?;

    let mut features_cost: u64 = 0;
    let mut has_premium = false;
    let mut feature_names = Vec::with_capacity(feature_keys.len());

    for key in feature_keys {
        let feature = Feature::find(key).ok_or_else(|| GymError::InvalidFeature { key: key.clone() })?;
        features_cost = features_cost
            .checked_add(u64::from(feature.cost))
            .ok_or(GymError::CostOverflow { stage: "features" })?;
        has_premium |= feature.is_premium;
        feature_names.push(feature.name.to_string());
    }

    let per_person = features_cost
        .checked_add(u64::from(plan.base_cost))
        .ok_or(GymError::CostOverflow { stage: "subtotal" })?;
    let gross_total = Decimal::from(per_person)
        .checked_mul(Decimal::from(member_count))
        .ok_or(GymError::CostOverflow { stage: "gross" })?;
    tracing::debug!(
        plan = plan.name,
        per_person,
        member_count,
        %gross_total,
        "computed gross total"
    );

    let surcharge = if has_premium {
        multiply(gross_total, PREMIUM_SURCHARGE_RATE, "surcharge")?
    } else {
        Decimal::ZERO
    };
    let mut running = add(gross_total, surcharge, "surcharge")?;

    let group_discount = if member_count >= GROUP_DISCOUNT_MIN_MEMBERS {
        multiply(running, GROUP_DISCOUNT_RATE, "group discount")?
    } else {
        Decimal::ZERO
    };
    running -= group_discount;

    let special_discount = special_offer_for(running);
    running -= special_discount;

    let final_cost = running
        .max(Decimal::ZERO)
        .trunc()
        .to_u64()
        .ok_or(GymError::CostOverflow { stage: "final" })?;
    tracing::debug!(
        %surcharge,
        %group_discount,
        %special_discount,
        final_cost,
        "applied adjustments"
    );

    let breakdown = PricingBreakdown {
        gross_total,
        surcharge,
        group_discount,
        special_discount,
        feature_names,
        final_cost,
    };
    Ok((final_cost, breakdown))
}

fn multiply(amount: Decimal, rate: Decimal, stage: &'static str) -> Result<Decimal> {
    amount
        .checked_mul(rate)
        .ok_or(GymError::CostOverflow { stage })
}

fn add(a: Decimal, b: Decimal, stage: &'static str) -> Result<Decimal> {
    a.checked_add(b).ok_or(GymError::CostOverflow { stage })
}

/// The catalog-backed calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPricing;

impl PriceCalculator for CatalogPricing {
    fn compute(
        &self,
        plan: &str,
        feature_keys: &[String],
        member_count: u32,
    ) -> Result<PricingBreakdown> {
        compute(plan, feature_keys, member_count).map(|(_, breakdown)| breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PricingRequest;
    use rust_decimal_macros::dec;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn cost(plan: &str, features: &[&str], members: u32) -> u64 {
        compute(plan, &keys(features), members).unwrap().0
    }

    #[test]
    fn test_basic_plan_single_member() {
        assert_eq!(cost("Basic", &[], 1), 50);
    }

    #[test]
    fn test_standard_feature_no_adjustments() {
        let (total, breakdown) = compute("Premium", &keys(&["2"]), 1).unwrap();
        assert_eq!(total, 120);
        assert_eq!(breakdown.gross_total, dec!(120));
        assert_eq!(breakdown.surcharge, Decimal::ZERO);
        assert_eq!(breakdown.group_discount, Decimal::ZERO);
        assert_eq!(breakdown.special_discount, Decimal::ZERO);
        assert_eq!(breakdown.feature_names, vec!["Group Classes"]);
    }

    #[test]
    fn test_group_discount() {
        assert_eq!(cost("Basic", &[], 2), 90);
    }

    #[test]
    fn test_premium_surcharge_truncates() {
        let (total, breakdown) = compute("Basic", &keys(&["3"]), 1).unwrap();
        assert_eq!(breakdown.surcharge, dec!(13.5));
        assert_eq!(total, 103);
    }

    #[test]
    fn test_special_offer_low_bracket() {
        let (total, breakdown) = compute("Family", &[], 2).unwrap();
        assert_eq!(breakdown.group_discount, dec!(30));
        assert_eq!(breakdown.special_discount, dec!(20));
        assert_eq!(total, 250);
    }

    #[test]
    fn test_special_offer_high_bracket() {
        let (total, breakdown) = compute("Family", &[], 4).unwrap();
        assert_eq!(breakdown.gross_total, dec!(600));
        assert_eq!(breakdown.special_discount, dec!(50));
        assert_eq!(total, 490);
    }

    #[test]
    fn test_all_stages_combined() {
        let (total, breakdown) = compute("Premium", &keys(&["4"]), 2).unwrap();
        assert_eq!(breakdown.gross_total, dec!(320));
        assert_eq!(breakdown.surcharge, dec!(48));
        assert_eq!(breakdown.group_discount, dec!(36.8));
        assert_eq!(breakdown.special_discount, dec!(20));
        assert_eq!(total, 311);
    }

    #[test]
    fn test_special_offer_uses_post_group_total() {
        // Gross 220 would earn the low offer, but 220 - 10% = 198 does not.
        let (total, breakdown) = compute("Basic", &keys(&["1", "1"]), 2).unwrap();
        assert_eq!(breakdown.gross_total, dec!(220));
        assert_eq!(breakdown.group_discount, dec!(22));
        assert_eq!(breakdown.special_discount, Decimal::ZERO);
        assert_eq!(total, 198);

        let (total, breakdown) = compute("Basic", &keys(&["1", "2", "2"]), 2).unwrap();
        assert_eq!(breakdown.gross_total, dec!(240));
        assert_eq!(breakdown.special_discount, dec!(20));
        assert_eq!(total, 196);

        let (total, breakdown) = compute("Basic", &keys(&["1", "2"]), 2).unwrap();
        assert_eq!(breakdown.gross_total, dec!(200));
        assert_eq!(breakdown.special_discount, Decimal::ZERO);
        assert_eq!(total, 180);
    }

    #[test]
    fn test_duplicates_are_counted() {
        let (total, breakdown) = compute("Basic", &keys(&["2", "2"]), 1).unwrap();
        assert_eq!(total, 90);
        assert_eq!(breakdown.feature_names, vec!["Group Classes", "Group Classes"]);
    }

    #[test]
    fn test_feature_names_keep_input_order() {
        let (_, breakdown) = compute("Basic", &keys(&["4", "1", "3"]), 1).unwrap();
        assert_eq!(
            breakdown.feature_names,
            vec!["Nutritional Plan", "Personal Training", "Sauna Access"]
        );
    }

    #[test]
    fn test_invalid_plan() {
        assert!(matches!(
            compute("NonExistent", &[], 1),
            Err(GymError::InvalidPlan { plan }) if plan == "NonExistent"
        ));
    }

    #[test]
    fn test_invalid_feature_names_first_bad_key() {
        assert!(matches!(
            compute("Basic", &keys(&["99"]), 1),
            Err(GymError::InvalidFeature { key }) if key == "99"
        ));
        assert!(matches!(
            compute("Basic", &keys(&["1", "x", "y"]), 1),
            Err(GymError::InvalidFeature { key }) if key == "x"
        ));
    }

    #[test]
    fn test_zero_members_is_not_rejected_here() {
        let (total, breakdown) = compute("Premium", &keys(&["3"]), 0).unwrap();
        assert_eq!(total, 0);
        assert_eq!(breakdown.gross_total, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent() {
        let first = compute("Premium", &keys(&["4", "1"]), 3).unwrap();
        let second = compute("Premium", &keys(&["4", "1"]), 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_features_never_lowers_gross_or_removes_surcharge() {
        for plan in ["Basic", "Premium", "Family"] {
            for members in 1..=5 {
                let (_, base) = compute(plan, &keys(&["1"]), members).unwrap();
                let (_, more) = compute(plan, &keys(&["1", "2"]), members).unwrap();
                assert!(more.gross_total >= base.gross_total);

                let (_, premium) = compute(plan, &keys(&["3"]), members).unwrap();
                let (_, both) = compute(plan, &keys(&["3", "2"]), members).unwrap();
                assert!(premium.surcharge > Decimal::ZERO);
                assert!(both.surcharge >= premium.surcharge);
            }
        }
    }

    #[test]
    fn test_calculator_trait_matches_free_function() {
        let request = PricingRequest::new("Family", keys(&["3", "4"]), 3);
        let breakdown = CatalogPricing.price(&request).unwrap();
        let (total, expected) = compute("Family", &request.feature_keys, 3).unwrap();
        assert_eq!(breakdown, expected);
        assert_eq!(breakdown.final_cost, total);
    }
}
