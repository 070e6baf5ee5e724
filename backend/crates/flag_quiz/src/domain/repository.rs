//! Source Traits
//!
//! Interfaces for the data the quiz depends on. Implementations are in the
//! infrastructure layer.

use crate::error::QuizResult;
use std::collections::BTreeMap;

/// Flag catalog source trait
#[trait_variant::make(CatalogSource: Send)]
pub trait LocalCatalogSource {
    /// Read and parse the full code → name mapping
    ///
    /// Fails with `DataUnavailable` when the dataset is missing or malformed.
    async fn load(&self) -> QuizResult<BTreeMap<String, String>>;
}

/// Flag image source trait
#[trait_variant::make(FlagImageSource: Send)]
pub trait LocalFlagImageSource {
    /// Fetch the PNG bytes of the flag for `code`
    async fn fetch_image(&self, code: &str) -> QuizResult<Vec<u8>>;
}

/// Upstream code list trait
#[trait_variant::make(CodeListSource: Send)]
pub trait LocalCodeListSource {
    /// Fetch the upstream code → name list
    async fn fetch_codes(&self) -> QuizResult<BTreeMap<String, String>>;
}
