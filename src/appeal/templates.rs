use crate::claim::is_valid_order_id;

/// User-facing rejection for identifiers that fail the format check.
pub const REJECT_INVALID_ORDER_ID: &str =
    "Order ID format is invalid. Expected pattern: 123-4567-890.";

/// User-facing rejection for reason codes outside the closed set.
pub const REJECT_UNSUPPORTED_REASON: &str =
    "Unsupported appeal reason. Expected one of: EMPTY_BOX, DAMAGED, SWITCHED.";

/// Why the return is disputed. Closed set; anything else is rejected at
/// the string boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppealReason {
    EmptyBox,
    Damaged,
    Switched,
}

impl std::fmt::Display for AppealReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppealReason::EmptyBox => write!(f, "EMPTY_BOX"),
            AppealReason::Damaged => write!(f, "DAMAGED"),
            AppealReason::Switched => write!(f, "SWITCHED"),
        }
    }
}

impl std::str::FromStr for AppealReason {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "EMPTY_BOX" => Ok(AppealReason::EmptyBox),
            "DAMAGED" => Ok(AppealReason::Damaged),
            "SWITCHED" => Ok(AppealReason::Switched),
            _ => Err(()),
        }
    }
}

/// Draft an appeal from a raw reason code.
///
/// The identifier check runs first: a bad identifier is rejected no matter
/// what the reason code says.
pub fn draft_appeal(reason_code: &str, order_id: &str) -> String {
    if !is_valid_order_id(order_id) {
        return REJECT_INVALID_ORDER_ID.to_string();
    }
    match reason_code.parse::<AppealReason>() {
        Ok(reason) => render_template(reason, order_id),
        Err(()) => REJECT_UNSUPPORTED_REASON.to_string(),
    }
}

/// Fill the fixed template for a reason code.
///
/// Re-validates the identifier rather than trusting that the caller did;
/// upstream validation is not assumed anywhere in the appeal path.
pub fn render_template(reason: AppealReason, order_id: &str) -> String {
    if !is_valid_order_id(order_id) {
        return REJECT_INVALID_ORDER_ID.to_string();
    }

    match reason {
        AppealReason::EmptyBox => format!(
            "Dear SAFE-T Team,\n\n\
            I am appealing the denied claim for order {}. The buyer reports an empty box, \
            yet the carrier-recorded shipped weight does not match the weight of the returned \
            parcel. This discrepancy between shipped and returned weight shows the item was \
            removed before the return was handed to the carrier. Please review the weight \
            records on both labels and reinstate the reimbursement.\n\n\
            Regards,\nThe Seller",
            order_id
        ),
        AppealReason::Damaged => format!(
            "Dear SAFE-T Team,\n\n\
            I am appealing the denied claim for order {}. The item left our facility intact, \
            as documented in the pre-dispatch photos, and came back damaged from carrier \
            handling during the return leg. The damage is not buyer-caused wear; the return \
            shipping box itself shows impact marks. Please review the attached photos and \
            reinstate the reimbursement.\n\n\
            Regards,\nThe Seller",
            order_id
        ),
        AppealReason::Switched => format!(
            "Dear SAFE-T Team,\n\n\
            I am appealing the denied claim for order {}. The item returned to us is not the \
            item we shipped: the serial number and model on the returned unit do not match \
            our dispatch records. This is a switched-item return. Please compare the recorded \
            serial numbers and reinstate the reimbursement.\n\n\
            Regards,\nThe Seller",
            order_id
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_box_template_mentions_weight_discrepancy() {
        let draft = draft_appeal("EMPTY_BOX", "114-9283-001");
        assert!(draft.contains("114-9283-001"));
        assert!(draft.contains("shipped and returned weight"));
    }

    #[test]
    fn test_each_reason_embeds_the_order_id() {
        for code in ["EMPTY_BOX", "DAMAGED", "SWITCHED"] {
            let draft = draft_appeal(code, "205-1177-302");
            assert!(draft.contains("205-1177-302"), "reason {}", code);
            assert_ne!(draft, REJECT_UNSUPPORTED_REASON);
            assert_ne!(draft, REJECT_INVALID_ORDER_ID);
        }
    }

    #[test]
    fn test_unknown_reason_is_rejected() {
        assert_eq!(
            draft_appeal("FOO", "114-9283-001"),
            REJECT_UNSUPPORTED_REASON
        );
    }

    #[test]
    fn test_invalid_id_rejected_regardless_of_reason() {
        assert_eq!(draft_appeal("EMPTY_BOX", "123456"), REJECT_INVALID_ORDER_ID);
        assert_eq!(draft_appeal("FOO", "123456"), REJECT_INVALID_ORDER_ID);
        assert_eq!(draft_appeal("DAMAGED", ""), REJECT_INVALID_ORDER_ID);
    }

    #[test]
    fn test_render_template_revalidates_identifier() {
        assert_eq!(
            render_template(AppealReason::Switched, "abc-1234-567"),
            REJECT_INVALID_ORDER_ID
        );
    }

    #[test]
    fn test_reason_round_trips_through_display() {
        for reason in [
            AppealReason::EmptyBox,
            AppealReason::Damaged,
            AppealReason::Switched,
        ] {
            assert_eq!(reason.to_string().parse::<AppealReason>(), Ok(reason));
        }
    }
}
