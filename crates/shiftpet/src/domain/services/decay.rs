//! Health Decay Calculator
//!
//! Health drops 5 points per full hour since the pet was last fed, applied
//! once per login. Decay is computed against the stored `last_fed`, which a
//! decay pass never updates: repeated logins without feeding keep decaying
//! toward 0, and the `min(health, ...)` clamp stops them from overshooting.

use chrono::{DateTime, NaiveDate, Utc};

/// Health lost per full unfed hour
const DECAY_PER_HOUR: i64 = 5;

/// Compute the post-decay health for a login at `now`.
///
/// Day-boundary rules: on a fresh day (no reset recorded for today yet) a
/// pet with no work session is resting and takes no decay, and a `last_fed`
/// on a prior day never carries decay across midnight. Once the reset date
/// has advanced to today, only same-day feeds decay.
pub fn decayed_health(
    last_fed: DateTime<Utc>,
    now: DateTime<Utc>,
    last_health_reset: Option<NaiveDate>,
    has_session_today: bool,
    health: i32,
) -> i32 {
    let today = now.date_naive();
    let fresh_day = last_health_reset.map_or(true, |d| d < today);

    // Resting: new day, shift not started yet
    if fresh_day && !has_session_today {
        return health;
    }

    // A new day always starts undecayed
    if last_fed.date_naive() < today {
        return health;
    }

    let hours = (now - last_fed).num_hours().max(0);
    let decrease = (hours * DECAY_PER_HOUR).min(health as i64);
    health - decrease as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, h, m, 0).unwrap()
    }

    fn today() -> NaiveDate {
        at(12, 0).date_naive()
    }

    #[test]
    fn test_three_unfed_hours_cost_fifteen_health() {
        let health = decayed_health(at(9, 0), at(12, 0), Some(today()), true, 80);
        assert_eq!(health, 65);
    }

    #[test]
    fn test_partial_hours_floor() {
        // 2h59m is still only two full hours
        let health = decayed_health(at(9, 0), at(11, 59), Some(today()), true, 80);
        assert_eq!(health, 70);
    }

    #[test]
    fn test_decay_never_goes_below_zero() {
        let health = decayed_health(at(0, 0), at(23, 0), Some(today()), true, 40);
        assert_eq!(health, 0);
    }

    #[test]
    fn test_no_session_on_fresh_day_rests() {
        let last_fed = at(12, 0) - Duration::days(3);
        let health = decayed_health(last_fed, at(12, 0), None, false, 80);
        assert_eq!(health, 80);
    }

    #[test]
    fn test_fresh_day_with_session_and_prior_day_feed_is_undecayed() {
        let last_fed = at(12, 0) - Duration::days(1);
        let yesterday = today() - Duration::days(1);
        let health = decayed_health(last_fed, at(12, 0), Some(yesterday), true, 80);
        assert_eq!(health, 80);
    }

    #[test]
    fn test_same_day_reset_ignores_session_flag() {
        let health = decayed_health(at(8, 0), at(10, 0), Some(today()), false, 90);
        assert_eq!(health, 80);
    }

    #[test]
    fn test_prior_day_feed_after_same_day_reset_is_undecayed() {
        let last_fed = at(12, 0) - Duration::days(2);
        let health = decayed_health(last_fed, at(12, 0), Some(today()), true, 55);
        assert_eq!(health, 55);
    }

    #[test]
    fn test_repeat_logins_decay_monotonically_without_overshoot() {
        let last_fed = at(9, 0);
        let first = decayed_health(last_fed, at(12, 0), Some(today()), true, 80);
        assert_eq!(first, 65);
        // An hour later, recomputed against the same stored last_fed
        let second = decayed_health(last_fed, at(13, 0), Some(today()), true, first);
        assert_eq!(second, 45);
        let floor = decayed_health(last_fed, at(23, 0), Some(today()), true, second);
        assert_eq!(floor, 0);
    }
}
