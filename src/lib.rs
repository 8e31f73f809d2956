// ==========================================
// Sorare MLB Optimizer - core library
// ==========================================
// Lineup construction for Sorare MLB contests: import the owned-card
// and projection feeds, build optimal lineups per contest under the
// shared energy budget, persist and report the results.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// domain layer - entities and types
pub mod domain;

// repository layer - persistence
pub mod repository;

// engine layer - eligibility, filtering, solving, allocation
pub mod engine;

// import layer - CSV feeds
pub mod importer;

// configuration layer - optimizer parameters and contest registry
pub mod config;

// database infrastructure (connection setup / PRAGMAs)
pub mod db;

// logging setup
pub mod logging;

// game week derivation
pub mod gameweek;

// text report rendering
pub mod report;

// service layer - run orchestration
pub mod service;

// ==========================================
// Re-exports
// ==========================================

// domain types
pub use domain::types::{Position, Rarity, Slot};

// domain entities
pub use domain::{Card, EnergyBudget, EnergyUsed, Lineup, PlayerKey, ProjectionTable};

// configuration
pub use config::{ContestType, OptimizerConfig};

// engines
pub use engine::{
    AllocationRun, CardPoolFilter, ContestResult, EligibilityCore, LineupAllocator, LineupSolver,
};

// service
pub use service::{LineupService, RunRequest, RunSummary, ServiceError};

/// Version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application display name.
pub const APP_NAME: &str = "Sorare MLB Optimizer";
