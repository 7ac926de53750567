use regex::Regex;
use std::sync::OnceLock;

// Compile-once pattern via OnceLock.
fn re_order_id() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{3}-\d{4}-\d{3}$").unwrap())
}

/// True iff the identifier is exactly `ddd-dddd-ddd`, anchored at both
/// ends. Empty input is false, not an error.
pub fn is_valid_order_id(order_id: &str) -> bool {
    re_order_id().is_match(order_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_id() {
        assert!(is_valid_order_id("114-9283-001"));
        assert!(is_valid_order_id("000-0000-000"));
    }

    #[test]
    fn test_malformed_ids() {
        assert!(!is_valid_order_id("123456"));
        assert!(!is_valid_order_id("abc-1234-567"));
        assert!(!is_valid_order_id(""));
        assert!(!is_valid_order_id("114-9283-0011"));
        assert!(!is_valid_order_id("1114-9283-001"));
        assert!(!is_valid_order_id(" 114-9283-001"));
        assert!(!is_valid_order_id("114-9283-001 "));
        assert!(!is_valid_order_id("114_9283_001"));
    }
}
