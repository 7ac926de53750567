pub mod generator;
pub mod templates;

pub use generator::{DraftGenerator, DraftSource, GeneratorCapability};
pub use templates::{
    draft_appeal, render_template, AppealReason, REJECT_INVALID_ORDER_ID,
    REJECT_UNSUPPORTED_REASON,
};

use tracing::warn;

use crate::claim::is_valid_order_id;

/// Ask the draft source for a richer appeal letter, falling back to the
/// fixed template when the capability is absent or the call fails. The
/// identifier check runs before any generator traffic.
pub async fn appeal_with_fallback(
    source: &dyn DraftSource,
    reason: AppealReason,
    order_id: &str,
) -> String {
    if !is_valid_order_id(order_id) {
        return REJECT_INVALID_ORDER_ID.to_string();
    }

    match source.generate(reason, order_id).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "draft generator failed, using template fallback");
            render_template(reason, order_id)
        }
    }
}
