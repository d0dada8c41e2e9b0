use crate::dataset::{Record, Table};
use crate::quality::similarity::ratio;

/// Name similarity above this flags a pair. Fixed, not configurable.
pub const NAME_SIMILARITY_CUTOFF: u32 = 80;

/// Missing names take part in the comparison as this literal token, so two
/// records with no name at all compare fully similar and get flagged.
const MISSING_NAME_TOKEN: &str = "nan";

/// Unordered pair of row indices, always emitted with `.0 < .1`.
pub type DuplicatePair = (usize, usize);

/// The swappable seam for duplicate detection. The pairwise scan below is
/// O(N²); a blocking or bucketing strategy can replace it behind this trait
/// without touching any caller.
pub trait DuplicateDetector {
    fn detect(&self, table: &Table) -> Vec<DuplicatePair>;
}

/// Naive all-pairs scan: flags (i, j) when the two names score above
/// [`NAME_SIMILARITY_CUTOFF`] or the two emails are exactly equal. Two absent
/// emails count as equal.
#[derive(Debug, Default)]
pub struct PairwiseDetector;

impl PairwiseDetector {
    fn is_duplicate(a: &Record, b: &Record) -> bool {
        let name_a = a.name.as_deref().unwrap_or(MISSING_NAME_TOKEN);
        let name_b = b.name.as_deref().unwrap_or(MISSING_NAME_TOKEN);
        ratio(name_a, name_b) > NAME_SIMILARITY_CUTOFF || a.email == b.email
    }
}

impl DuplicateDetector for PairwiseDetector {
    fn detect(&self, table: &Table) -> Vec<DuplicatePair> {
        let records = table.records();
        let mut pairs = Vec::new();
        for i in 0..records.len() {
            for j in (i + 1)..records.len() {
                if Self::is_duplicate(&records[i], &records[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

// ----- Tests -----
#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, email: Option<&str>) -> Record {
        Record {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            phone: Some("555-0100".to_string()),
            address: Some("1 Main St".to_string()),
            company: Some("Acme".to_string()),
        }
    }

    #[test]
    fn test_empty_table_has_no_pairs() {
        let pairs = PairwiseDetector.detect(&Table::default());
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_identical_records_flagged_once() {
        let table = Table::new(vec![
            record(Some("Alice"), Some("a@x.com")),
            record(Some("Alice"), Some("a@x.com")),
        ]);
        assert_eq!(PairwiseDetector.detect(&table), vec![(0, 1)]);
    }

    #[test]
    fn test_distinct_records_not_flagged() {
        let table = Table::new(vec![
            record(Some("Alice"), Some("a@x.com")),
            record(Some("Bob"), Some("b@y.com")),
        ]);
        assert!(PairwiseDetector.detect(&table).is_empty());
    }

    #[test]
    fn test_near_name_match_flagged() {
        // "Jon Smith" vs "John Smith": 1 edit over 10 chars -> ratio 90.
        let table = Table::new(vec![
            record(Some("Jon Smith"), Some("jon@x.com")),
            record(Some("John Smith"), Some("john@x.com")),
        ]);
        assert_eq!(PairwiseDetector.detect(&table), vec![(0, 1)]);
    }

    #[test]
    fn test_exact_email_match_flagged_despite_names() {
        let table = Table::new(vec![
            record(Some("Alice"), Some("shared@x.com")),
            record(Some("Zebediah"), Some("shared@x.com")),
        ]);
        assert_eq!(PairwiseDetector.detect(&table), vec![(0, 1)]);
    }

    #[test]
    fn test_two_absent_emails_compare_equal() {
        let table = Table::new(vec![
            record(Some("Alice"), None),
            record(Some("Zebediah"), None),
        ]);
        assert_eq!(PairwiseDetector.detect(&table), vec![(0, 1)]);
    }

    #[test]
    fn test_two_absent_names_compare_fully_similar() {
        let table = Table::new(vec![
            record(None, Some("a@x.com")),
            record(None, Some("b@y.com")),
        ]);
        assert_eq!(PairwiseDetector.detect(&table), vec![(0, 1)]);
    }

    #[test]
    fn test_pairs_are_ordered_and_irreflexive() {
        let table = Table::new(vec![
            record(Some("Alice"), Some("a@x.com")),
            record(Some("Alice"), Some("a@x.com")),
            record(Some("Alice"), Some("a@x.com")),
        ]);
        let pairs = PairwiseDetector.detect(&table);
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        for (i, j) in pairs {
            assert!(i < j);
        }
    }
}
