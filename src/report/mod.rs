pub mod charts;

use crate::dataset::Table;
use crate::quality::DuplicatePair;
use std::collections::HashMap;

/// How often each name appears as the first member of a duplicate pair,
/// sorted by count descending (ties broken by name for a stable ordering).
/// Pairs whose first record has no name are skipped.
pub fn duplicate_name_counts(table: &Table, pairs: &[DuplicatePair]) -> Vec<(String, usize)> {
    let records = table.records();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &(i, _) in pairs {
        if let Some(name) = records[i].name.as_deref() {
            *counts.entry(name).or_default() += 1;
        }
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Columns with at least one absent cell, in header order.
pub fn missing_column_counts(table: &Table) -> Vec<(&'static str, usize)> {
    table
        .missing_by_column()
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .collect()
}

/// Clean/dirty percentage split for the accuracy pie.
pub fn clean_dirty_split(accuracy: f64) -> (f64, f64) {
    (accuracy, 100.0 - accuracy)
}
