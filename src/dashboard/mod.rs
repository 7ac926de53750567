pub mod summary;

pub use summary::{demo_claims, load_claims, DashboardSummary, OrderDetail};
