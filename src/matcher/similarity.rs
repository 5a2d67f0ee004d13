//! Approximate string similarity.
//!
//! Scores are percentages in `[0, 100]` built on the indel distance
//! (insertions and deletions only), the same family of measures used by
//! common fuzzy-matching toolkits.

use std::collections::BTreeSet;

/// Length of the longest common subsequence of two character slices.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Single rolling row over `b`
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diagonal = 0;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }
    row[b.len()]
}

/// Minimum number of insertions and deletions turning `s1` into `s2`.
pub fn indel_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    a.len() + b.len() - 2 * lcs_len(&a, &b)
}

/// Normalized indel similarity. Two empty strings are identical.
pub fn ratio(s1: &str, s2: &str) -> f64 {
    let lensum = s1.chars().count() + s2.chars().count();
    if lensum == 0 {
        return 100.0;
    }
    100.0 * (1.0 - indel_distance(s1, s2) as f64 / lensum as f64)
}

/// Order-insensitive similarity over whitespace-separated token sets.
///
/// Shared tokens are factored out: if one side's tokens are all contained
/// in the other's the score is 100. Otherwise the best of three
/// comparisons is returned: "shared + leftovers of a" against "shared +
/// leftovers of b", and the shared part alone against each of those.
/// Either side being empty scores 0.
pub fn token_set_ratio(s1: &str, s2: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = s1.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = s2.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let diff_ab_joined = diff_ab.join(" ");
    let diff_ba_joined = diff_ba.join(" ");
    let ab_len = diff_ab_joined.chars().count();
    let ba_len = diff_ba_joined.chars().count();
    let sect_len = intersection.join(" ").chars().count();

    // Lengths of "sect diff_ab" and "sect diff_ba"; the shared prefix adds
    // nothing to their distance, only to the normalization
    let separator = usize::from(sect_len > 0);
    let sect_ab_len = sect_len + separator + ab_len;
    let sect_ba_len = sect_len + separator + ba_len;

    let dist = indel_distance(&diff_ab_joined, &diff_ba_joined);
    let best = 100.0 * (1.0 - dist as f64 / (sect_ab_len + sect_ba_len) as f64);
    if sect_len == 0 {
        return best;
    }

    // "sect" vs "sect diff" differs by pure insertion
    let sect_ab_dist = separator + ab_len;
    let sect_ba_dist = separator + ba_len;
    let sect_ab_ratio = 100.0 * (1.0 - sect_ab_dist as f64 / (sect_len + sect_ab_len) as f64);
    let sect_ba_ratio = 100.0 * (1.0 - sect_ba_dist as f64 / (sect_len + sect_ba_len) as f64);

    best.max(sect_ab_ratio).max(sect_ba_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_indel_distance() {
        assert_eq!(indel_distance("", ""), 0);
        assert_eq!(indel_distance("abc", ""), 3);
        assert_eq!(indel_distance("kitten", "sitting"), 5);
        // Substitution costs two edits
        assert_eq!(indel_distance("cat", "cut"), 2);
        assert_eq!(indel_distance("précédent", "precedent"), 4);
    }

    #[test]
    fn test_ratio() {
        assert_relative_eq!(ratio("", ""), 100.0);
        assert_relative_eq!(ratio("queen", "queen"), 100.0);
        assert_relative_eq!(ratio("abc", "xyz"), 0.0);
        // lcs("abcd", "abce") = 3, distance 2 over 8 chars
        assert_relative_eq!(ratio("abcd", "abce"), 75.0);
    }

    #[test]
    fn test_token_set_subset_is_perfect() {
        assert_relative_eq!(token_set_ratio("bohemian", "bohemian rhapsody"), 100.0);
        assert_relative_eq!(token_set_ratio("queen bohemian", "queen bohemian rhapsody"), 100.0);
        assert_relative_eq!(token_set_ratio("rhapsody bohemian", "bohemian rhapsody"), 100.0);
    }

    #[test]
    fn test_token_set_empty() {
        assert_relative_eq!(token_set_ratio("", "queen"), 0.0);
        assert_relative_eq!(token_set_ratio("queen", "   "), 0.0);
    }

    #[test]
    fn test_token_set_partial_overlap() {
        // sect "jackson" (7): "billy jeans remix" vs "billie jean michael",
        // distance 12 over 25 + 27 chars
        assert_relative_eq!(
            token_set_ratio("jackson billy jeans remix", "michael jackson billie jean"),
            100.0 * (1.0 - 12.0 / 52.0)
        );
        // sect "hotel" (5): "californie live" vs "california", distance 7 over 21 + 16
        assert_relative_eq!(
            token_set_ratio("hotel californie live", "hotel california"),
            100.0 * (1.0 - 7.0 / 37.0)
        );
    }

    #[test]
    fn test_token_set_disjoint_is_plain_ratio() {
        assert_relative_eq!(
            token_set_ratio("billy jean", "imagine"),
            ratio("billy jean", "imagine")
        );
    }

    #[test]
    fn test_token_set_symmetric() {
        let a = token_set_ratio("stairway to heaven", "highway to hell");
        let b = token_set_ratio("highway to hell", "stairway to heaven");
        assert_relative_eq!(a, b);
    }

    #[test]
    fn test_token_set_unrelated_is_low() {
        assert!(token_set_ratio("xyz random text", "hotel california") < 70.0);
        assert!(token_set_ratio("completely different", "abc") < 70.0);
    }
}
