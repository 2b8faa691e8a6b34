use std::collections::HashSet;

use super::TermRecord;

/// Folds a freshly fetched batch into the terms already known for the day.
///
/// Known terms keep their position and their first-seen field values; only
/// titles not yet present are appended, in `incoming` order. Records with an
/// empty title are dropped, and duplicates within either input collapse to
/// their first occurrence.
pub fn merge_terms(incoming: &[TermRecord], existing: &[TermRecord]) -> Vec<TermRecord> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + incoming.len());
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    for record in existing.iter().chain(incoming) {
        if !record.is_valid() {
            continue;
        }
        if seen.insert(record.key()) {
            merged.push(record.clone());
        }
    }
    merged
}
