//! Infrastructure Layer
//!
//! Implementations of the domain source traits.

pub mod flag_cdn;
pub mod json_file;
