//! Fixed plan and feature catalogs, plus the rates applied on top of them.
//!
//! Both catalogs are constant tables; lookups are linear scans over a handful
//! of entries and preserve display order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub base_cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub key: &'static str,
    pub name: &'static str,
    pub cost: u32,
    pub is_premium: bool,
}

pub const PLAN_CATALOG: [Plan; 3] = [
    Plan {
        name: "Basic",
        base_cost: 50,
    },
    Plan {
        name: "Premium",
        base_cost: 100,
    },
    Plan {
        name: "Family",
        base_cost: 150,
    },
];

pub const FEATURE_CATALOG: [Feature; 4] = [
    Feature {
        key: "1",
        name: "Personal Training",
        cost: 30,
        is_premium: false,
    },
    Feature {
        key: "2",
        name: "Group Classes",
        cost: 20,
        is_premium: false,
    },
    Feature {
        key: "3",
        name: "Sauna Access",
        cost: 40,
        is_premium: true,
    },
    Feature {
        key: "4",
        name: "Nutritional Plan",
        cost: 60,
        is_premium: true,
    },
];

/// Uplift on the gross total when any premium feature is selected.
pub const PREMIUM_SURCHARGE_RATE: Decimal = dec!(0.15);
/// Reduction on the surcharged total for groups.
pub const GROUP_DISCOUNT_RATE: Decimal = dec!(0.10);
pub const GROUP_DISCOUNT_MIN_MEMBERS: u32 = 2;

pub const SPECIAL_OFFER_HIGH_THRESHOLD: Decimal = dec!(400);
pub const SPECIAL_OFFER_HIGH_DISCOUNT: Decimal = dec!(50);
pub const SPECIAL_OFFER_LOW_THRESHOLD: Decimal = dec!(200);
pub const SPECIAL_OFFER_LOW_DISCOUNT: Decimal = dec!(20);

impl Plan {
    /// Exact, case sensitive lookup.
    pub fn find(name: &str) -> Option<&'static Plan> {
        PLAN_CATALOG.iter().find(|plan| plan.name == name)
    }
}

impl Feature {
    pub fn find(key: &str) -> Option<&'static Feature> {
        FEATURE_CATALOG.iter().find(|feature| feature.key == key)
    }
}

/// Flat special-offer discount for a running total. Only the highest
/// threshold crossed applies.
pub fn special_offer_for(total: Decimal) -> Decimal {
    if total > SPECIAL_OFFER_HIGH_THRESHOLD {
        SPECIAL_OFFER_HIGH_DISCOUNT
    } else if total > SPECIAL_OFFER_LOW_THRESHOLD {
        SPECIAL_OFFER_LOW_DISCOUNT
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_lookup_is_case_sensitive() {
        assert_eq!(Plan::find("Family").map(|p| p.base_cost), Some(150));
        assert!(Plan::find("family").is_none());
        assert!(Plan::find("").is_none());
    }

    #[test]
    fn test_feature_lookup() {
        let sauna = Feature::find("3").unwrap();
        assert_eq!(sauna.name, "Sauna Access");
        assert!(sauna.is_premium);
        assert!(Feature::find("99").is_none());
        assert!(Feature::find(" 1").is_none());
    }

    #[test]
    fn test_special_offer_thresholds_are_exclusive() {
        assert_eq!(special_offer_for(dec!(200)), Decimal::ZERO);
        assert_eq!(special_offer_for(dec!(200.01)), dec!(20));
        assert_eq!(special_offer_for(dec!(400)), dec!(20));
        assert_eq!(special_offer_for(dec!(400.5)), dec!(50));
    }
}
