// src/store/dedup.rs
use chrono::Duration;

use super::{load_collection, save_collection, KvStore};
use crate::config::consts::DUPLICATE_WINDOW_HOURS;
use crate::error::Result;
use crate::model::ScoutRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No candidates; the store was not touched.
    Empty,
    /// Every candidate was already stored recently; nothing written.
    NothingNew { candidates: usize },
    /// `added` records appended, collection is now `total` long.
    Saved { added: usize, total: usize },
}

/// Same name, captured within `window` of each other (either direction,
/// boundary included). Two absent names count as the same name.
pub fn is_duplicate(existing: &ScoutRecord, candidate: &ScoutRecord, window: Duration) -> bool {
    if existing.name != candidate.name {
        return false;
    }
    let delta = candidate.timestamp - existing.timestamp;
    let delta = if delta < Duration::zero() { -delta } else { delta };
    delta <= window
}

/// Candidates with no duplicate in `existing`, in input order.
///
/// Candidates are only checked against `existing`, never against each
/// other: two same-named records in one batch are both kept.
pub fn select_new(existing: &[ScoutRecord], candidates: &[ScoutRecord], window: Duration) -> Vec<ScoutRecord> {
    candidates
        .iter()
        .filter(|c| !existing.iter().any(|e| is_duplicate(e, c, window)))
        .cloned()
        .collect()
}

/// Append the new candidates to the persisted collection.
///
/// Read-all, filter, write-all. A store error on either side aborts the
/// whole save and leaves the collection as it was.
pub fn save_new(store: &mut dyn KvStore, candidates: &[ScoutRecord]) -> Result<SaveOutcome> {
    if candidates.is_empty() {
        return Ok(SaveOutcome::Empty);
    }

    let mut all = load_collection(store)?;
    let fresh = select_new(&all, candidates, Duration::hours(DUPLICATE_WINDOW_HOURS));

    if fresh.is_empty() {
        logf!("Save: all {} candidates already stored", candidates.len());
        return Ok(SaveOutcome::NothingNew { candidates: candidates.len() });
    }

    let added = fresh.len();
    all.extend(fresh);
    save_collection(store, &all)?;

    logf!("Save: {added} of {} candidates new, {} total", candidates.len(), all.len());
    Ok(SaveOutcome::Saved { added, total: all.len() })
}
