//! Sale Processor - scoring rules
//!
//! Translates one sale event into a health bonus and a narrative, and
//! recomputes happiness and goal-met from the session's goal progress.
//! Health bonuses are additive and only the final value clamps at 100.
//! Happiness is never incremented; it is always a pure function of the
//! membership and credit-card counters against their goals.

use crate::domain::entities::SaleEvent;

/// Health gained for any sale
const BASE_BONUS: i32 = 5;
/// Extra health at the $100 and $500 revenue thresholds
const REVENUE_TIER_BONUS: i32 = 5;
/// Health for a paid-membership or credit-card attach
const ATTACH_BONUS: i32 = 20;
/// Extra health when one sale carries both attaches
const COMBO_BONUS: i32 = 10;
/// Health for a warranty attach
const WARRANTY_BONUS: i32 = 10;

/// Total health bonus for a sale, before the 100 clamp
pub fn health_bonus(sale: &SaleEvent) -> i32 {
    let mut bonus = BASE_BONUS;

    if sale.revenue >= 100.0 {
        bonus += REVENUE_TIER_BONUS;
    }
    if sale.revenue >= 500.0 {
        bonus += REVENUE_TIER_BONUS;
    }

    if sale.has_paid_membership {
        bonus += ATTACH_BONUS;
    }
    if sale.has_credit_card {
        bonus += ATTACH_BONUS;
    }
    if sale.has_credit_card && sale.has_paid_membership {
        bonus += COMBO_BONUS;
    }

    if sale.has_warranty {
        bonus += WARRANTY_BONUS;
    }

    bonus
}

/// Goal is met once both attach counters reach their targets. Revenue is
/// informational only and plays no role here.
pub fn goal_met(current_pm: i32, goal_pm: i32, current_cc: i32, goal_cc: i32) -> bool {
    current_pm >= goal_pm && current_cc >= goal_cc
}

fn progress(current: i32, goal: i32) -> f64 {
    if goal > 0 {
        ((current as f64 / goal as f64) * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Happiness recomputed from goal progress: the mean of the membership and
/// credit-card progress percentages, rounded.
pub fn happiness(current_pm: i32, goal_pm: i32, current_cc: i32, goal_cc: i32) -> i32 {
    let pm_progress = progress(current_pm, goal_pm);
    let cc_progress = progress(current_cc, goal_cc);
    ((pm_progress + cc_progress) / 2.0).round() as i32
}

/// Human-readable confirmation with the triggered bonus phrases appended.
/// The combo phrase replaces both individual attach phrases; the warranty
/// phrase always comes last.
pub fn sale_message(sale: &SaleEvent) -> String {
    let mut bonus = String::new();

    if sale.has_credit_card && sale.has_paid_membership {
        bonus.push_str("🎉 AMAZING COMBO! Credit Card + Paid Membership! Total: +50 Health!");
    } else if sale.has_paid_membership {
        bonus.push_str("⭐ EXCELLENT! Paid Membership! +20 Health!");
    } else if sale.has_credit_card {
        bonus.push_str("💳 EXCELLENT! Credit Card! +20 Health!");
    }

    if sale.has_warranty {
        if bonus.is_empty() {
            bonus.push_str("🛡️ Great job with the Warranty! +10 Health!");
        } else {
            bonus.push_str(" 🛡️ Plus Warranty! +10 Health!");
        }
    }

    let mut message = String::from("Animal fed successfully!");
    if !bonus.is_empty() {
        message.push(' ');
        message.push_str(&bonus);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(revenue: f64, cc: bool, pm: bool, warranty: bool) -> SaleEvent {
        SaleEvent {
            revenue,
            has_credit_card: cc,
            has_paid_membership: pm,
            has_warranty: warranty,
            overridden_high_value: false,
        }
    }

    #[test]
    fn test_plain_sale_earns_base_bonus() {
        assert_eq!(health_bonus(&SaleEvent::plain(50.0)), 5);
    }

    #[test]
    fn test_revenue_tiers_stack() {
        assert_eq!(health_bonus(&sale(100.0, false, false, false)), 10);
        assert_eq!(health_bonus(&sale(500.0, false, false, false)), 15);
    }

    #[test]
    fn test_full_combo_sale_is_worth_seventy_five() {
        // 5 base + 5 (>=100) + 5 (>=500) + 20 PM + 20 CC + 10 combo + 10 warranty
        let event = sale(600.0, true, true, true);
        assert_eq!(health_bonus(&event), 75);
    }

    #[test]
    fn test_goal_met_needs_both_counters() {
        assert!(goal_met(1, 1, 1, 1));
        assert!(!goal_met(1, 1, 0, 1));
        assert!(!goal_met(0, 1, 1, 1));
        // revenue plays no role, overshoot is fine
        assert!(goal_met(3, 2, 2, 1));
    }

    #[test]
    fn test_happiness_is_mean_of_progress() {
        assert_eq!(happiness(0, 1, 0, 1), 0);
        assert_eq!(happiness(1, 2, 0, 1), 25);
        assert_eq!(happiness(1, 1, 1, 1), 100);
        // progress caps at 100 per counter
        assert_eq!(happiness(5, 1, 0, 2), 50);
    }

    #[test]
    fn test_happiness_with_zero_goal_counts_as_no_progress() {
        assert_eq!(happiness(3, 0, 1, 1), 50);
        assert_eq!(happiness(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_happiness_stays_in_bounds() {
        for pm in 0..5 {
            for cc in 0..5 {
                let h = happiness(pm, 2, cc, 3);
                assert!((0..=100).contains(&h));
            }
        }
    }

    #[test]
    fn test_combo_message_replaces_individual_phrases() {
        let message = sale_message(&sale(600.0, true, true, false));
        assert!(message.contains("AMAZING COMBO"));
        assert!(!message.contains("EXCELLENT"));
    }

    #[test]
    fn test_warranty_phrase_appends_after_attach_phrase() {
        let message = sale_message(&sale(50.0, false, true, true));
        assert!(message.contains("Paid Membership"));
        assert!(message.ends_with("Plus Warranty! +10 Health!"));
    }

    #[test]
    fn test_plain_sale_message_has_no_bonus_phrase() {
        assert_eq!(sale_message(&SaleEvent::plain(50.0)), "Animal fed successfully!");
    }

    #[test]
    fn test_warranty_only_message() {
        let message = sale_message(&sale(50.0, false, false, true));
        assert!(message.contains("Great job with the Warranty"));
    }
}
