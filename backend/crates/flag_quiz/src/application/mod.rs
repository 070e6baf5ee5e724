//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod generate_question;
pub mod issue_question;
pub mod load_catalog;
