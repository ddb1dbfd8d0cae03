//! Edit distance and normalized similarity.

/// Normalize a label or query for matching.
///
/// Lowercases first, then strips leading and trailing whitespace
/// (newlines included).
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Calculate Levenshtein edit distance between two strings.
///
/// Distance is counted in Unicode scalar values, not bytes. No
/// normalization is applied; see [`similarity_score`] for the
/// case- and whitespace-insensitive form.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    char_distance(&a_chars, &b_chars)
}

/// Levenshtein distance over pre-split characters.
///
/// The shorter input indexes the rows, so memory is O(min(m, n)).
pub(crate) fn char_distance(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let n = short.len();
    if n == 0 {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity of two already-normalized character sequences.
///
/// Two empty sequences are identical and score 1.0.
pub(crate) fn char_similarity(a: &[char], b: &[char]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - (char_distance(a, b) as f64 / longest as f64)
}

/// Normalized similarity between two strings, in `[0.0, 1.0]`.
///
/// Both inputs are passed through [`normalize`], then scored as
/// `1 - distance / max(len_a, len_b)`. Identical strings (after
/// normalization) score 1.0, including the case where both are empty.
///
/// Lengths and edits count Unicode scalar values, not grapheme clusters:
/// `"\u{130}"` lowercases to `i` plus a combining dot, so it scores 0.5
/// against `"i"`.
///
/// # Example
/// ```
/// use dishfinder_search::similarity_score;
///
/// let score = similarity_score("cat", "CAP ");
/// assert!((score - 2.0 / 3.0).abs() < 1e-9);
/// ```
pub fn similarity_score(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = normalize(a).chars().collect();
    let b_chars: Vec<char> = normalize(b).chars().collect();
    char_similarity(&a_chars, &b_chars)
}
