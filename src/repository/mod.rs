// ==========================================
// Sorare MLB Optimizer - repository layer
// ==========================================

pub mod error;
pub mod lineup_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use lineup_repo::{LineupRepository, StoredLineup};
