//! Domain Value Objects
//!
//! Immutable value types for the flag quiz domain.

use crate::error::{QuizError, QuizResult};

/// Requested number of answer options for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionCount(usize);

impl OptionCount {
    pub const DEFAULT: OptionCount = OptionCount(4);
    pub const MIN: usize = 1;

    /// Validate a caller-supplied count; anything below 1 is rejected
    pub fn new(requested: i64) -> QuizResult<Self> {
        usize::try_from(requested)
            .ok()
            .filter(|&count| count >= Self::MIN)
            .map(Self)
            .ok_or_else(|| {
                QuizError::InvalidArgument(format!(
                    "optionCount must be at least {}, got {}",
                    Self::MIN,
                    requested
                ))
            })
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Number of options that a catalog of `catalog_len` entries can satisfy
    pub fn clamp_to(&self, catalog_len: usize) -> usize {
        self.0.min(catalog_len)
    }
}

impl Default for OptionCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}
