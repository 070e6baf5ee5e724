//! Flag Quiz Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Catalog, question generation, history buffer, source traits
//! - `application/` - Use cases and configuration
//! - `infra/` - JSON dataset and flag CDN implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Question Model
//! - The catalog is loaded once and shared read-only
//! - The last 7 issued codes are never picked again as the answer, unless the
//!   catalog is too small to avoid it
//! - Recently issued codes may still appear as distractors
//! - Options never contain the same name twice

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::QuizConfig;
pub use application::generate_question::QuestionGenerator;
pub use application::load_catalog::LoadCatalogUseCase;
pub use domain::entities::{CatalogEntry, FlagCatalog, FlagQuestion};
pub use error::{QuizError, QuizResult};
pub use infra::flag_cdn::FlagCdnClient;
pub use infra::json_file::JsonFileCatalogSource;
pub use presentation::router::quiz_router;
