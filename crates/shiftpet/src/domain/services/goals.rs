//! Session Goal Calculator
//!
//! Declared work hours translate into the day's targets: $1000 of revenue
//! per hour, one paid membership per 4 hours, one credit card per 7 hours.

use serde::{Deserialize, Serialize};

/// Goal targets derived from declared work hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionGoals {
    pub goal_amount: f64,
    pub goal_paid_memberships: i32,
    pub goal_credit_cards: i32,
}

/// Compute goal targets for a shift of `work_hours` (> 0, validated at the
/// boundary). Re-declaring hours overwrites goals in place; progress
/// counters are left untouched by the caller.
pub fn compute_goals(work_hours: f64) -> SessionGoals {
    SessionGoals {
        goal_amount: work_hours * 1000.0,
        goal_paid_memberships: (work_hours / 4.0).ceil() as i32,
        goal_credit_cards: (work_hours / 7.0).ceil() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_hour_shift() {
        let goals = compute_goals(4.0);
        assert_eq!(goals.goal_amount, 4000.0);
        assert_eq!(goals.goal_paid_memberships, 1);
        assert_eq!(goals.goal_credit_cards, 1);
    }

    #[test]
    fn test_seven_hour_shift() {
        let goals = compute_goals(7.0);
        assert_eq!(goals.goal_amount, 7000.0);
        assert_eq!(goals.goal_paid_memberships, 2);
        assert_eq!(goals.goal_credit_cards, 1);
    }

    #[test]
    fn test_fractional_hours_round_up() {
        let goals = compute_goals(7.5);
        assert_eq!(goals.goal_amount, 7500.0);
        assert_eq!(goals.goal_paid_memberships, 2);
        assert_eq!(goals.goal_credit_cards, 2);
    }

    #[test]
    fn test_twelve_hour_shift() {
        let goals = compute_goals(12.0);
        assert_eq!(goals.goal_amount, 12000.0);
        assert_eq!(goals.goal_paid_memberships, 3);
        assert_eq!(goals.goal_credit_cards, 2);
    }
}
