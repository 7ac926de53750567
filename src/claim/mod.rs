pub mod checker;
pub mod clock;
pub mod status;
pub mod types;
pub mod validator;

pub use checker::DeadlineChecker;
pub use clock::{CLAIM_WINDOW_DAYS, SECONDS_PER_DAY, SECONDS_PER_HOUR};
pub use status::{ClaimStatus, URGENT_THRESHOLD_DAYS};
pub use types::{DeadlineResult, OrderClaim};
pub use validator::is_valid_order_id;
