use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::claim::{clock, is_valid_order_id, ClaimStatus, DeadlineChecker, OrderClaim};
use crate::error::Result;

/// Per-claim record carried into the summary for downstream rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub order_id: String,
    pub order_date: String,
    pub status: ClaimStatus,
    pub color: &'static str,
    pub time_left_zh: String,
    pub time_left_en: String,
    pub message_zh: String,
    pub message_en: String,
}

/// Aggregate view over a batch of claims. Built once per call, never
/// persisted.
#[derive(Debug, Default, Serialize)]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub expired_orders: usize,
    pub urgent_orders: usize,
    pub safe_orders: usize,
    pub order_details: Vec<OrderDetail>,
}

impl DashboardSummary {
    /// Aggregate a batch against the current reference clock. An empty
    /// batch falls back to the demonstration set.
    pub fn build(claims: &[OrderClaim]) -> Self {
        Self::build_at(claims, clock::now())
    }

    /// Aggregate a batch against an explicit reference instant.
    ///
    /// Claims with a malformed identifier are skipped entirely: no counter,
    /// no detail record. Claims with a valid identifier but a malformed
    /// date land in the details with `ERROR` status and count toward
    /// `total_orders` only. A malformed claim never aborts the batch.
    pub fn build_at(claims: &[OrderClaim], now: DateTime<Utc>) -> Self {
        let demo;
        let claims = if claims.is_empty() {
            demo = demo_claims();
            &demo[..]
        } else {
            claims
        };

        let mut summary = DashboardSummary::default();

        for claim in claims {
            if !is_valid_order_id(&claim.order_id) {
                debug!(order_id = %claim.order_id, "skipping claim with malformed identifier");
                continue;
            }

            summary.total_orders += 1;

            let result = DeadlineChecker::check_at(&claim.order_date, now);
            match result.status {
                ClaimStatus::Expired => summary.expired_orders += 1,
                ClaimStatus::Urgent => summary.urgent_orders += 1,
                ClaimStatus::Safe => summary.safe_orders += 1,
                ClaimStatus::Error => {}
            }

            summary.order_details.push(OrderDetail {
                order_id: claim.order_id.clone(),
                order_date: claim.order_date.clone(),
                status: result.status,
                color: result.color,
                time_left_zh: result.time_left_zh,
                time_left_en: result.time_left_en,
                message_zh: result.message_zh,
                message_en: result.message_en,
            });
        }

        info!(
            total = summary.total_orders,
            expired = summary.expired_orders,
            urgent = summary.urgent_orders,
            safe = summary.safe_orders,
            "dashboard aggregation complete"
        );

        summary
    }

    /// Print a formatted summary to console.
    pub fn print_summary(&self) {
        println!("\n=== SAFE-T Claim Dashboard ===");
        println!("Total Orders:  {}", self.total_orders);
        println!("Expired:       {}", self.expired_orders);
        println!("Urgent:        {}", self.urgent_orders);
        println!("Safe:          {}", self.safe_orders);
        println!("==============================");
    }
}

/// Fixed demonstration batch used when no claims are supplied.
pub fn demo_claims() -> Vec<OrderClaim> {
    vec![
        OrderClaim::new("114-9283-001", "2026-02-10"),
        OrderClaim::new("205-1177-302", "2026-01-05"),
        OrderClaim::new("330-8892-114", "2026-02-28"),
    ]
}

/// Load a claim batch from a JSON file (an array of `{order_id, order_date}`
/// objects).
pub fn load_claims(path: &Path) -> Result<Vec<OrderClaim>> {
    let raw = std::fs::read_to_string(path)?;
    let claims: Vec<OrderClaim> = serde_json::from_str(&raw)?;
    info!(count = claims.len(), path = %path.display(), "loaded claim batch");
    Ok(claims)
}
