// ==========================================
// Sorare MLB Optimizer - import layer
// ==========================================
// CSV ingestion for the two input feeds: owned cards and per-game
// projections.
// ==========================================

pub mod card_importer;
pub mod error;
pub mod projection_importer;

pub use card_importer::{CardImport, CardImporter, SkippedRow};
pub use error::{ImportError, ImportResult};
pub use projection_importer::ProjectionImporter;
