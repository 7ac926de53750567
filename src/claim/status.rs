use serde::{Deserialize, Serialize};

use crate::claim::clock::split_remaining;

/// Claims with at most this many whole days left are urgent (inclusive).
pub const URGENT_THRESHOLD_DAYS: i64 = 5;

/// Severity tier of a claim, plus the input-error state.
///
/// `Error` marks malformed input, not a time-based tier; the three
/// time-based tiers are mutually exclusive and exhaustive over the sign
/// of the remaining duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Error,
    Expired,
    Urgent,
    Safe,
}

impl ClaimStatus {
    /// Presentation hint, one per status.
    pub fn color(&self) -> &'static str {
        match self {
            ClaimStatus::Error => "orange",
            ClaimStatus::Expired => "gray",
            ClaimStatus::Urgent => "red",
            ClaimStatus::Safe => "green",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimStatus::Error => write!(f, "ERROR"),
            ClaimStatus::Expired => write!(f, "EXPIRED"),
            ClaimStatus::Urgent => write!(f, "URGENT"),
            ClaimStatus::Safe => write!(f, "SAFE"),
        }
    }
}

/// Classify the remaining duration.
///
/// Acts on the sign of `diff_seconds` for the expiry boundary (inclusive:
/// exactly at the deadline is expired) and on whole days for the urgency
/// threshold. Locale never enters here.
pub fn classify(diff_seconds: i64, days_left: i64) -> ClaimStatus {
    if diff_seconds <= 0 {
        ClaimStatus::Expired
    } else if days_left <= URGENT_THRESHOLD_DAYS {
        ClaimStatus::Urgent
    } else {
        ClaimStatus::Safe
    }
}

/// Render a remaining duration in both locales.
///
/// With whole days left the day and hour components both render; inside the
/// final day only the hour component does.
pub fn format_time_left(days_left: i64, hours_left: i64) -> (String, String) {
    if days_left > 0 {
        (
            format!("{}天{}小时", days_left, hours_left),
            format!("{}d {}h", days_left, hours_left),
        )
    } else {
        (format!("{}小时", hours_left), format!("{}h", hours_left))
    }
}

/// Overdue duration for expired claims, rendered from the raw (non-positive)
/// difference.
pub fn format_overdue(diff_seconds: i64) -> (String, String) {
    let (days_over, hours_over) = split_remaining(-diff_seconds);
    if days_over > 0 {
        (
            format!("已超期{}天{}小时", days_over, hours_over),
            format!("overdue {}d {}h", days_over, hours_over),
        )
    } else {
        (
            format!("已超期{}小时", hours_over),
            format!("overdue {}h", hours_over),
        )
    }
}

pub fn expired_messages() -> (String, String) {
    (
        "❌ 已过期！无法索赔。原因：触发 2026/02/16 新政 30 天自动拒绝规则。".to_string(),
        "❌ Expired! Claim rejected: the 30-day auto-denial rule of the 2026/02/16 policy \
         has been triggered."
            .to_string(),
    )
}

pub fn urgent_messages(time_zh: &str, time_en: &str) -> (String, String) {
    (
        format!("🚨 紧急！仅剩 {}，请立即提交证据链（重量对比/照片）。", time_zh),
        format!(
            "🚨 Urgent! Only {} left. Submit your evidence chain (weight comparison/photos) \
             immediately.",
            time_en
        ),
    )
}

pub fn safe_messages(time_zh: &str, time_en: &str) -> (String, String) {
    (
        format!("✅ 安全。剩余 {} 处理窗口。", time_zh),
        format!("✅ Safe. {} remaining in the claim window.", time_en),
    )
}

pub fn error_messages() -> (String, String) {
    (
        "⚠️ 日期格式错误，请使用 YYYY-MM-DD 格式。".to_string(),
        "⚠️ Invalid date format, expected YYYY-MM-DD.".to_string(),
    )
}
