// ==========================================
// Sorare MLB Optimizer - configuration layer
// ==========================================
// Immutable, table-driven configuration: optimizer parameters plus the
// structured contest-type registry.
// ==========================================

pub mod contest;
pub mod optimizer;

pub use contest::{
    daily_order, lookup, priority_order, ContestConfigError, ContestType, RarityCap, DAILY_SLOTS,
    WEEKLY_SLOTS,
};
pub use optimizer::OptimizerConfig;
