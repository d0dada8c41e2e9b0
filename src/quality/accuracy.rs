use crate::dataset::Table;
use crate::quality::duplicates::DuplicateDetector;

/// Accuracy percentage for a table:
///
/// `((total_records - missing_cells - duplicate_pairs) / total_records) * 100`
///
/// rounded to two decimal places. An empty table scores 0.
///
/// `missing_cells` counts cells while the other terms count rows and pairs,
/// so heavily degraded tables can score below 0 (or a pathological input
/// above 100). The value is reported as-is rather than clamped.
pub fn accuracy(table: &Table, detector: &dyn DuplicateDetector) -> f64 {
    let total_records = table.len();
    if total_records == 0 {
        return 0.0;
    }

    let missing_cells = table.missing_cells();
    let duplicate_pairs = detector.detect(table).len();

    let clean_records = total_records as f64 - (missing_cells + duplicate_pairs) as f64;
    let percentage = clean_records / total_records as f64 * 100.0;
    (percentage * 100.0).round() / 100.0
}
