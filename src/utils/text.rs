//! Small iterator helpers for building counting problems out of text and maps.

use itertools::Itertools;

/// Yields the alphabetic characters of `text`, in order.
pub fn alpha_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| c.is_alphabetic())
}

/// Yields every unordered pair of positionally distinct alphabetic characters.
///
/// Positions `(i, j)` and `(j, i)` give the same pair, so only `i < j` is produced,
/// ordered by `(i, j)`. Equal characters at different positions still pair up:
/// `"te3x_t"` has four alphabetic positions and yields the six pairs
/// `(t,e) (t,x) (t,t) (e,x) (e,t) (x,t)`.
pub fn alpha_char_pairs(text: &str) -> impl Iterator<Item = (char, char)> {
    alpha_chars(text).collect::<Vec<_>>().into_iter().tuple_combinations()
}

/// Yields the keys whose value is at or above `threshold`, in the map's own
/// iteration order.
///
/// Works with anything that iterates as `(&K, &V)`: `HashMap`, `BTreeMap` or a
/// [`SparseVector`](crate::matrix::SparseVector) reference.
pub fn keys_geq_threshold<'a, K, V, I>(entries: I, threshold: V) -> impl Iterator<Item = &'a K>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: PartialOrd + 'a,
{
    entries
        .into_iter()
        .filter_map(move |(k, v)| (v >= &threshold).then_some(k))
}
