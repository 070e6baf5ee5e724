//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (CatalogEntry, FlagCatalog, FlagQuestion)
//! - Domain value objects (OptionCount)
//! - The recent-history buffer used for repeat avoidance
//! - Domain services (question generation)
//! - Source traits (interfaces)

pub mod entities;
pub mod history;
pub mod repository;
pub mod services;
pub mod value_objects;
