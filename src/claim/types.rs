use serde::{Deserialize, Serialize};

use crate::claim::status::ClaimStatus;

/// A marketplace return claim as submitted: an order identifier and the
/// calendar date of the order (no time component).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderClaim {
    pub order_id: String,
    pub order_date: String,
}

impl OrderClaim {
    pub fn new(order_id: impl Into<String>, order_date: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            order_date: order_date.into(),
        }
    }
}

/// Outcome of one deadline evaluation. Computed fresh per query against the
/// reference clock and never cached; recompute when "now" advances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeadlineResult {
    pub status: ClaimStatus,
    /// Whole days remaining, floor semantics. Negative once expired.
    pub days_left: i64,
    /// Leftover hours, always in `[0, 24)`.
    pub hours_left: i64,
    /// Raw signed difference `deadline - now` in seconds.
    pub diff_seconds: i64,
    pub time_left_zh: String,
    pub time_left_en: String,
    pub message_zh: String,
    pub message_en: String,
    pub color: &'static str,
}
