//! Generate Question Use Case

use crate::domain::entities::{FlagCatalog, FlagQuestion};
use crate::domain::history::RecentHistory;
use crate::domain::services;
use crate::domain::value_objects::OptionCount;
use crate::error::{QuizError, QuizResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard};

/// Mutable state owned by the generator
struct GeneratorState<R> {
    history: RecentHistory,
    rng: R,
}

/// Question Generator
///
/// One instance serves every request. The catalog is shared read-only; the
/// history and RNG sit behind a mutex that is held for the whole (synchronous)
/// generation, so concurrent requests cannot interleave history updates.
pub struct QuestionGenerator<R = StdRng>
where
    R: Rng,
{
    catalog: Arc<FlagCatalog>,
    state: Mutex<GeneratorState<R>>,
}

impl QuestionGenerator<StdRng> {
    /// Generator seeded from the operating system
    pub fn new(catalog: Arc<FlagCatalog>, history_capacity: usize) -> Self {
        Self::with_rng(catalog, history_capacity, StdRng::from_os_rng())
    }
}

impl<R> QuestionGenerator<R>
where
    R: Rng,
{
    pub fn with_rng(catalog: Arc<FlagCatalog>, history_capacity: usize, rng: R) -> Self {
        Self {
            catalog,
            state: Mutex::new(GeneratorState {
                history: RecentHistory::new(history_capacity),
                rng,
            }),
        }
    }

    pub fn catalog(&self) -> &FlagCatalog {
        &self.catalog
    }

    /// Generate the next question with up to `option_count` options
    pub fn generate_question(&self, option_count: i64) -> QuizResult<FlagQuestion> {
        let option_count = OptionCount::new(option_count)?;
        if self.catalog.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        let mut state = self.lock_state()?;
        let GeneratorState { history, rng } = &mut *state;
        let question = services::generate_question(rng, &self.catalog, history, option_count)?;

        tracing::debug!(
            code = %question.code,
            options = question.options.len(),
            recent = history.len(),
            "Generated flag question"
        );

        Ok(question)
    }

    /// Mark a code as issued outside of `generate_question`
    pub fn record_issued(&self, code: &str) -> QuizResult<()> {
        self.lock_state()?.history.record_issued(code);
        Ok(())
    }

    pub fn is_recently_issued(&self, code: &str) -> QuizResult<bool> {
        Ok(self.lock_state()?.history.is_recently_issued(code))
    }

    /// Recently issued codes, oldest first
    pub fn recent_codes(&self) -> QuizResult<Vec<String>> {
        Ok(self
            .lock_state()?
            .history
            .iter()
            .map(String::from)
            .collect())
    }

    fn lock_state(&self) -> QuizResult<MutexGuard<'_, GeneratorState<R>>> {
        self.state
            .lock()
            .map_err(|_| QuizError::Internal("question generator state poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    fn seeded(catalog: FlagCatalog, seed: u64) -> QuestionGenerator {
        QuestionGenerator::with_rng(Arc::new(catalog), 7, StdRng::seed_from_u64(seed))
    }

    fn ten_countries() -> FlagCatalog {
        FlagCatalog::from_pairs([
            ("ar", "Argentina"),
            ("br", "Brazil"),
            ("ca", "Canada"),
            ("de", "Germany"),
            ("eg", "Egypt"),
            ("fr", "France"),
            ("gh", "Ghana"),
            ("in", "India"),
            ("jp", "Japan"),
            ("ke", "Kenya"),
        ])
    }

    #[test]
    fn test_rejects_zero_and_negative_counts() {
        let generator = seeded(ten_countries(), 1);

        for count in [0, -1, -100] {
            let err = generator.generate_question(count).unwrap_err();
            assert!(matches!(err, QuizError::InvalidArgument(_)), "count {count}");
        }
        assert!(generator.recent_codes().unwrap().is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let generator = seeded(FlagCatalog::default(), 2);
        let err = generator.generate_question(4).unwrap_err();
        assert!(matches!(err, QuizError::EmptyCatalog));
    }

    #[test]
    fn test_invalid_argument_checked_before_empty_catalog() {
        let generator = seeded(FlagCatalog::default(), 3);
        let err = generator.generate_question(0).unwrap_err();
        assert!(matches!(err, QuizError::InvalidArgument(_)));
    }

    #[test]
    fn test_history_tracks_issued_codes() {
        let generator = seeded(ten_countries(), 4);

        let question = generator.generate_question(4).unwrap();
        assert!(generator.is_recently_issued(&question.code).unwrap());
        assert_eq!(generator.recent_codes().unwrap(), vec![question.code]);
    }

    #[test]
    fn test_record_issued_excludes_code_from_primary() {
        let catalog = FlagCatalog::from_pairs([("fr", "France"), ("de", "Germany")]);
        let generator = seeded(catalog, 5);

        generator.record_issued("fr").unwrap();
        assert!(generator.is_recently_issued("fr").unwrap());

        let question = generator.generate_question(2).unwrap();
        assert_eq!(question.code, "de");
        assert!(question.options.contains(&"France".to_string()));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = seeded(ten_countries(), 7);
        let b = seeded(ten_countries(), 7);

        for _ in 0..20 {
            assert_eq!(
                a.generate_question(4).unwrap(),
                b.generate_question(4).unwrap()
            );
        }
    }

    #[test]
    fn test_concurrent_callers_share_history() {
        let generator = Arc::new(seeded(ten_countries(), 8));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| generator.generate_question(3).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut total = 0;
        for handle in handles {
            for question in handle.join().unwrap() {
                let unique: HashSet<&String> = question.options.iter().collect();
                assert_eq!(unique.len(), 3);
                total += 1;
            }
        }

        assert_eq!(total, 100);
        assert_eq!(generator.recent_codes().unwrap().len(), 7);
    }
}
