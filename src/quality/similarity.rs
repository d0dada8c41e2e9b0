/// Levenshtein edit distance over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP: prev holds distances for the previous a-prefix.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Similarity on a 0-100 scale: `100 * (1 - distance / max_len)`, rounded.
/// Two empty strings are fully similar.
pub fn ratio(a: &str, b: &str) -> u32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }
    let distance = levenshtein(a, b);
    (100.0 * (1.0 - distance as f64 / max_len as f64)).round() as u32
}

// ----- Tests -----
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("Alice", "Alice"), 0);
    }

    #[test]
    fn test_ratio_scale() {
        assert_eq!(ratio("", ""), 100);
        assert_eq!(ratio("Alice", "Alice"), 100);
        assert_eq!(ratio("abcd", "wxyz"), 0);
        // one edit over five chars: 100 * (1 - 1/5) = 80
        assert_eq!(ratio("Alice", "Alise"), 80);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        assert_eq!(ratio("Jon Smith", "John Smith"), ratio("John Smith", "Jon Smith"));
    }
}
