// ==========================================
// Sorare MLB Optimizer - engine layer
// ==========================================
// Stateless engines composed by the allocator:
// eligibility -> pool filter -> solver -> allocator
// ==========================================

pub mod allocator;
pub mod eligibility;
pub mod pool_filter;
pub mod solver;

pub use allocator::{AllocationRun, ContestResult, LineupAllocator};
pub use eligibility::EligibilityCore;
pub use pool_filter::{CardPoolFilter, PoolCard};
pub use solver::LineupSolver;
