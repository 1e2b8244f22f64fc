//! Levenshtein edit distance
//!
//! Classic Wagner-Fischer dynamic programming over the full
//! `(m + 1) × (n + 1)` matrix.
//!
//! # Operations
//! - Insert: cost = 1
//! - Delete: cost = 1
//! - Substitute: cost = 1
//!
//! Transpositions count as two edits.

/// Compute the Levenshtein edit distance between two strings.
///
/// Distances are measured in Unicode scalar values, not bytes.
///
/// # Example
/// ```
/// use listingguard_keywords::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("cat", "hat"), 1);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            matrix[i][j] = (matrix[i - 1][j] + 1) // deletion
                .min(matrix[i][j - 1] + 1) // insertion
                .min(matrix[i - 1][j - 1] + cost); // substitution
        }
    }

    matrix[m][n]
}

/// Normalized Levenshtein similarity (0.0 to 1.0).
///
/// `similarity = 1.0 - distance / max_length`. Two empty strings are identical.
///
/// # Example
/// ```
/// use listingguard_keywords::levenshtein::levenshtein_similarity;
///
/// assert_eq!(levenshtein_similarity("hello", "hello"), 1.0);
/// assert!(levenshtein_similarity("cat", "hat") > 0.6);
/// ```
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
