use crate::domain::catalog::{
    FEATURE_CATALOG, GROUP_DISCOUNT_RATE, PLAN_CATALOG, PREMIUM_SURCHARGE_RATE,
};
use crate::domain::model::PricingBreakdown;
use rust_decimal::Decimal;

pub fn plan_menu() -> Vec<String> {
    let mut lines = vec![String::new(), "--- GYM MEMBERSHIP PLANS ---".to_string()];
    lines.extend(
        PLAN_CATALOG
            .iter()
            .map(|plan| format!("- {}: ${}", plan.name, plan.base_cost)),
    );
    lines
}

pub fn feature_menu() -> Vec<String> {
    let mut lines = vec![String::new(), "--- ADDITIONAL FEATURES ---".to_string()];
    lines.extend(FEATURE_CATALOG.iter().map(|feature| {
        let marker = if feature.is_premium { " [PREMIUM]" } else { "" };
        format!("{}. {} (${}){}", feature.key, feature.name, feature.cost, marker)
    }));
    lines
}

pub fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

pub fn group_discount_note() -> String {
    format!(
        ">> NOTE: Group discount of {}% will be applied!",
        percent(GROUP_DISCOUNT_RATE)
    )
}

/// Confirmation summary. Adjustment lines appear only when non-zero.
pub fn confirmation(plan: &str, members: u32, breakdown: &PricingBreakdown) -> Vec<String> {
    let features = if breakdown.feature_names.is_empty() {
        "None".to_string()
    } else {
        breakdown.feature_names.join(", ")
    };

    let mut lines = vec![
        String::new(),
        "--- CONFIRMATION ---".to_string(),
        format!("Plan: {} (x{} members)", plan, members),
        format!("Features: {}", features),
        format!("Gross Total: ${:.2}", breakdown.gross_total),
    ];

    if breakdown.surcharge > Decimal::ZERO {
        lines.push(format!(
            "Premium Surcharge (+{}%): +${:.2}",
            percent(PREMIUM_SURCHARGE_RATE),
            breakdown.surcharge
        ));
    }
    if breakdown.group_discount > Decimal::ZERO {
        lines.push(format!(
            "Group Discount (-{}%): -${:.2}",
            percent(GROUP_DISCOUNT_RATE),
            breakdown.group_discount
        ));
    }
    if breakdown.special_discount > Decimal::ZERO {
        lines.push(format!(
            "Special Offer Discount: -${:.2}",
            breakdown.special_discount
        ));
    }

    lines.push(String::new());
    lines.push(format!("FINAL TOTAL COST: ${}", breakdown.final_cost));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::compute;

    #[test]
    fn test_feature_menu_marks_premium() {
        let menu = feature_menu();
        assert!(menu.contains(&"3. Sauna Access ($40) [PREMIUM]".to_string()));
        assert!(menu.contains(&"1. Personal Training ($30)".to_string()));
    }

    #[test]
    fn test_plan_menu_lists_catalog_in_order() {
        let menu = plan_menu();
        assert_eq!(&menu[2..], &["- Basic: $50", "- Premium: $100", "- Family: $150"]);
    }

    #[test]
    fn test_confirmation_hides_zero_adjustments() {
        let (_, breakdown) = compute("Basic", &[], 1).unwrap();
        let lines = confirmation("Basic", 1, &breakdown);
        assert!(lines.contains(&"Features: None".to_string()));
        assert!(lines.contains(&"Gross Total: $50.00".to_string()));
        assert!(!lines.iter().any(|l| l.contains("Surcharge")));
        assert!(!lines.iter().any(|l| l.contains("Discount")));
        assert_eq!(lines.last().unwrap(), "FINAL TOTAL COST: $50");
    }

    #[test]
    fn test_confirmation_shows_every_adjustment() {
        let (_, breakdown) = compute("Premium", &["4".to_string()], 2).unwrap();
        let lines = confirmation("Premium", 2, &breakdown);
        assert!(lines.contains(&"Plan: Premium (x2 members)".to_string()));
        assert!(lines.contains(&"Premium Surcharge (+15%): +$48.00".to_string()));
        assert!(lines.contains(&"Group Discount (-10%): -$36.80".to_string()));
        assert!(lines.contains(&"Special Offer Discount: -$20.00".to_string()));
        assert_eq!(lines.last().unwrap(), "FINAL TOTAL COST: $311");
    }
}
