use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Claim window length in days, fixed by the 2026-02-16 policy revision.
pub const CLAIM_WINDOW_DAYS: i64 = 30;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Capture the current reference instant once.
///
/// Callers that need "now" more than once must capture it once and pass it
/// down, otherwise the deadline and the comparison instant can drift apart.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parse an order date strictly as `YYYY-MM-DD`.
pub fn parse_order_date(order_date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(order_date_str, "%Y-%m-%d").ok()
}

/// UTC midnight of a calendar day. Order dates carry no time component, so
/// the whole pipeline anchors them here before any arithmetic.
pub fn to_utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Claim deadline: UTC midnight of the order date plus the policy window.
pub fn deadline_for(order_date: NaiveDate) -> DateTime<Utc> {
    to_utc_midnight(order_date) + Duration::days(CLAIM_WINDOW_DAYS)
}

/// Split a signed second count into whole days and leftover hours.
///
/// Floor division keeps `hours` in `[0, 24)` for any sign of `diff_seconds`;
/// `days` goes negative once the deadline has passed. Status decisions act
/// on the raw sign of `diff_seconds`, never on these two.
pub fn split_remaining(diff_seconds: i64) -> (i64, i64) {
    let days = diff_seconds.div_euclid(SECONDS_PER_DAY);
    let hours = diff_seconds.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    (days, hours)
}
