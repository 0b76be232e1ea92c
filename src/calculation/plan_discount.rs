//! Subscription plan discounts.
//!
//! An active plan takes a percentage off the optimized base cost. The
//! engine's discount arithmetic only reads the percentage; usage caps on
//! the plan are the surrounding system's concern.

use rust_decimal::Decimal;

use crate::models::SubscriptionUsage;
use crate::money;

/// Calculates the discount a subscription plan takes off the base cost.
///
/// The discount is `base_cost × discount_percentage / 100`, rounded half-up
/// to two decimals.
pub fn calculate_plan_discount(base_cost: Decimal, subscription: &SubscriptionUsage) -> Decimal {
    money::percentage_of(base_cost, subscription.discount_percentage)
}

/// Human-readable description of an applied plan discount.
///
/// The percentage renders with its stored scale, e.g. `"Plan discount:
/// 20.00%"` for a plan storing `20.00`.
pub fn discount_description(subscription: &SubscriptionUsage) -> String {
    format!("Plan discount: {}%", subscription.discount_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriptionStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn subscription(percentage: &str) -> SubscriptionUsage {
        SubscriptionUsage {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            parking_lot_id: Uuid::new_v4(),
            plan_name: "Monthly Plan".to_string(),
            discount_percentage: dec(percentage),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            status: SubscriptionStatus::Active,
            entries_used: 0,
            hours_used: 0,
            max_entries: None,
            max_hours: None,
        }
    }

    /// PD-001: 20% off a $10.00 base is $2.00
    #[test]
    fn test_twenty_percent_discount() {
        let s = subscription("20.00");
        assert_eq!(calculate_plan_discount(dec("10.00"), &s), dec("2.00"));
    }

    /// PD-002: a zero percentage discounts nothing
    #[test]
    fn test_zero_percent_discount() {
        let s = subscription("0");
        assert_eq!(calculate_plan_discount(dec("10.00"), &s), dec("0.00"));
    }

    /// PD-003: a full discount equals the base cost
    #[test]
    fn test_hundred_percent_discount() {
        let s = subscription("100");
        assert_eq!(calculate_plan_discount(dec("12.34"), &s), dec("12.34"));
    }

    /// PD-004: odd percentages round half-up
    #[test]
    fn test_discount_rounds_half_up() {
        let s = subscription("15");
        // 9.99 * 15 / 100 = 1.4985
        assert_eq!(calculate_plan_discount(dec("9.99"), &s), dec("1.50"));
    }

    #[test]
    fn test_description_keeps_stored_scale() {
        assert_eq!(
            discount_description(&subscription("20.00")),
            "Plan discount: 20.00%"
        );
        assert_eq!(
            discount_description(&subscription("20")),
            "Plan discount: 20%"
        );
    }
}
