// ==========================================
// Sorare MLB Optimizer - domain layer
// ==========================================
// Entities and value types shared by every layer. Read-only to the
// engines; produced by the importers and the persistence layer.
// ==========================================

pub mod card;
pub mod lineup;
pub mod projection;
pub mod types;

pub use card::{Card, PlayerKey};
pub use lineup::{round_score, EnergyBudget, EnergyUsed, Lineup};
pub use projection::ProjectionTable;
pub use types::{Position, Rarity, Slot};
