//! Domain Services
//!
//! Pure question generation logic. Randomness is always supplied by the
//! caller so the selection order is reproducible with a seeded RNG.

use crate::domain::entities::{CatalogEntry, FlagCatalog, FlagQuestion};
use crate::domain::history::RecentHistory;
use crate::domain::value_objects::OptionCount;
use crate::error::{QuizError, QuizResult};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

/// Pick the correct answer for the next question.
///
/// Draws uniformly among entries not in `history`. When the history covers
/// the whole catalog, draws from the whole catalog instead. Returns `None`
/// only for an empty catalog.
pub fn pick_primary<'a, R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &'a FlagCatalog,
    history: &RecentHistory,
) -> Option<&'a CatalogEntry> {
    let eligible: Vec<&CatalogEntry> = catalog
        .entries()
        .iter()
        .filter(|entry| !history.is_recently_issued(&entry.code))
        .collect();

    if eligible.is_empty() {
        catalog.entries().choose(rng)
    } else {
        eligible.choose(rng).copied()
    }
}

/// Collect `target` distinct option names, starting with the primary's name.
///
/// Each draw excludes the primary and earlier draws by code; a drawn name
/// already among the options is skipped. If the catalog runs out of unused
/// codes first (only possible with duplicate names), fewer options are
/// returned.
pub fn collect_options<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &FlagCatalog,
    primary: &CatalogEntry,
    target: usize,
) -> Vec<String> {
    let mut used_codes: HashSet<&str> = HashSet::from([primary.code.as_str()]);
    let mut seen_names: HashSet<&str> = HashSet::from([primary.name.as_str()]);
    let mut options = vec![primary.name.clone()];

    while options.len() < target {
        let pool: Vec<&CatalogEntry> = catalog
            .entries()
            .iter()
            .filter(|entry| !used_codes.contains(entry.code.as_str()))
            .collect();

        let Some(entry) = pool.choose(rng).copied() else {
            break;
        };

        used_codes.insert(entry.code.as_str());
        if seen_names.insert(entry.name.as_str()) {
            options.push(entry.name.clone());
        }
    }

    options
}

/// Generate one question and record its code in `history`
pub fn generate_question<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &FlagCatalog,
    history: &mut RecentHistory,
    option_count: OptionCount,
) -> QuizResult<FlagQuestion> {
    if catalog.is_empty() {
        return Err(QuizError::EmptyCatalog);
    }

    let primary = pick_primary(rng, catalog, history).ok_or(QuizError::EmptyCatalog)?;
    history.record_issued(&primary.code);

    let target = option_count.clamp_to(catalog.len());
    let mut options = collect_options(rng, catalog, primary, target);
    options.shuffle(rng);

    Ok(FlagQuestion {
        code: primary.code.clone(),
        name: primary.name.clone(),
        options,
    })
}
