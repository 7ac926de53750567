use chrono::{DateTime, Utc};
use tracing::debug;

use crate::claim::clock::{self, deadline_for, parse_order_date, split_remaining};
use crate::claim::status::{
    classify, error_messages, expired_messages, format_overdue, format_time_left, safe_messages,
    urgent_messages, ClaimStatus,
};
use crate::claim::types::DeadlineResult;

pub struct DeadlineChecker;

impl DeadlineChecker {
    /// Evaluate a claim against the current reference clock.
    ///
    /// The clock is captured exactly once and handed to [`check_at`];
    /// calling [`clock::now`] twice would let the deadline and the
    /// comparison instant drift apart.
    ///
    /// [`check_at`]: DeadlineChecker::check_at
    pub fn check(order_date_str: &str) -> DeadlineResult {
        Self::check_at(order_date_str, clock::now())
    }

    /// Evaluate a claim against an explicit reference instant.
    ///
    /// A malformed date yields the `ERROR` result, never a panic or an
    /// `Err` across this contract.
    pub fn check_at(order_date_str: &str, now: DateTime<Utc>) -> DeadlineResult {
        let order_date = match parse_order_date(order_date_str) {
            Some(date) => date,
            None => {
                debug!(order_date = %order_date_str, "order date failed strict YYYY-MM-DD parse");
                return Self::error_result();
            }
        };

        let deadline = deadline_for(order_date);
        let diff_seconds = (deadline - now).num_seconds();
        let (days_left, hours_left) = split_remaining(diff_seconds);
        let status = classify(diff_seconds, days_left);

        debug!(
            order_date = %order_date_str,
            %deadline,
            diff_seconds,
            days_left,
            hours_left,
            %status,
            "claim deadline evaluated"
        );

        let (time_left_zh, time_left_en) = match status {
            ClaimStatus::Expired => format_overdue(diff_seconds),
            _ => format_time_left(days_left, hours_left),
        };

        let (message_zh, message_en) = match status {
            ClaimStatus::Expired => expired_messages(),
            ClaimStatus::Urgent => urgent_messages(&time_left_zh, &time_left_en),
            ClaimStatus::Safe => safe_messages(&time_left_zh, &time_left_en),
            ClaimStatus::Error => unreachable!("classify never yields ERROR"),
        };

        DeadlineResult {
            status,
            days_left,
            hours_left,
            diff_seconds,
            time_left_zh,
            time_left_en,
            message_zh,
            message_en,
            color: status.color(),
        }
    }

    fn error_result() -> DeadlineResult {
        let (message_zh, message_en) = error_messages();
        DeadlineResult {
            status: ClaimStatus::Error,
            days_left: 0,
            hours_left: 0,
            diff_seconds: 0,
            time_left_zh: String::new(),
            time_left_en: String::new(),
            message_zh,
            message_en,
            color: ClaimStatus::Error.color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_fresh_order_is_safe_with_full_window() {
        let result = DeadlineChecker::check_at("2026-02-10", at(2026, 2, 10, 0, 0, 0));
        assert_eq!(result.status, ClaimStatus::Safe);
        assert_eq!(result.days_left, 30);
        assert_eq!(result.hours_left, 0);
        assert_eq!(result.time_left_en, "30d 0h");
        assert!(result.message_zh.contains("30天0小时"));
    }

    #[test]
    fn test_old_order_is_expired() {
        // 2026-01-05 + 30 days = 2026-02-04, well before the reference.
        let result = DeadlineChecker::check_at("2026-01-05", at(2026, 2, 10, 0, 0, 0));
        assert_eq!(result.status, ClaimStatus::Expired);
        assert!(result.diff_seconds < 0);
        assert!(result.days_left < 0);
        assert_eq!(result.color, "gray");
    }

    #[test]
    fn test_exact_deadline_is_expired() {
        // order date == now - 30 days, both at UTC midnight: diff is zero.
        let result = DeadlineChecker::check_at("2026-01-11", at(2026, 2, 10, 0, 0, 0));
        assert_eq!(result.diff_seconds, 0);
        assert_eq!(result.status, ClaimStatus::Expired);
    }

    #[test]
    fn test_one_second_before_deadline_is_urgent() {
        let result = DeadlineChecker::check_at("2026-01-11", at(2026, 2, 9, 23, 59, 59));
        assert_eq!(result.diff_seconds, 1);
        assert_eq!(result.status, ClaimStatus::Urgent);
        assert_eq!(result.time_left_en, "0h");
    }

    #[test]
    fn test_five_days_with_hours_is_urgent() {
        // Deadline 2026-02-15T00:00Z, reference 5d3h earlier.
        let result = DeadlineChecker::check_at("2026-01-16", at(2026, 2, 9, 21, 0, 0));
        assert_eq!(result.days_left, 5);
        assert_eq!(result.hours_left, 3);
        assert_eq!(result.status, ClaimStatus::Urgent);
        assert_eq!(result.time_left_en, "5d 3h");
    }

    #[test]
    fn test_six_days_exactly_is_safe() {
        let result = DeadlineChecker::check_at("2026-01-17", at(2026, 2, 10, 0, 0, 0));
        assert_eq!(result.days_left, 6);
        assert_eq!(result.hours_left, 0);
        assert_eq!(result.status, ClaimStatus::Safe);
    }

    #[test]
    fn test_malformed_date_is_error_not_panic() {
        for bad in ["2026/02/10", "not-a-date", "2026-02", "", "2026-02-30"] {
            let result = DeadlineChecker::check_at(bad, at(2026, 2, 10, 0, 0, 0));
            assert_eq!(result.status, ClaimStatus::Error, "input: {:?}", bad);
            assert_eq!(result.days_left, 0);
            assert_eq!(result.hours_left, 0);
            assert!(result.time_left_zh.is_empty());
            assert!(result.time_left_en.is_empty());
            assert_eq!(result.color, "orange");
        }
    }

    #[test]
    fn test_frozen_clock_is_idempotent() {
        let now = at(2026, 2, 9, 13, 37, 42);
        let first = DeadlineChecker::check_at("2026-02-01", now);
        let second = DeadlineChecker::check_at("2026-02-01", now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_statuses_are_exhaustive_and_exclusive() {
        let now = at(2026, 2, 10, 0, 0, 0);
        for (date, expected) in [
            ("bogus", ClaimStatus::Error),
            ("2026-01-01", ClaimStatus::Expired),
            ("2026-01-14", ClaimStatus::Urgent),
            ("2026-02-01", ClaimStatus::Safe),
        ] {
            assert_eq!(DeadlineChecker::check_at(date, now).status, expected);
        }
    }
}
