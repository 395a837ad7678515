//! Decomposition of match scores into per-set slots.

/// Number of set slots produced for every score.
pub const MAX_SETS: usize = 5;

/// Splits a score on whitespace into exactly [`MAX_SETS`] slots.
///
/// Tokens past the fifth are dropped; missing slots are empty strings.
///
/// ```
/// use tennis_normalization::split_score;
///
/// let sets = split_score(Some("6-4 3-6 7-6(5)"));
/// assert_eq!(sets, ["6-4", "3-6", "7-6(5)", "", ""]);
/// ```
pub fn split_score(score: Option<&str>) -> [String; MAX_SETS] {
    let mut sets: [String; MAX_SETS] = Default::default();
    let tokens = score.unwrap_or_default().split_whitespace();
    for (slot, token) in sets.iter_mut().zip(tokens) {
        *slot = token.to_string();
    }
    sets
}
