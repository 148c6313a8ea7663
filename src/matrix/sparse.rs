// Dictionary-of-keys sparse vector and matrix.
//
// Absent keys read as the base type's zero without being inserted; only entries
// written through `set`, `accumulate` or `insert_row` are ever stored.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use num_traits::Zero;

use crate::core::traits::SparseRows;

/// A sparse vector over an arbitrary ordered key domain.
///
/// Stored entries are kept in ascending key order, so iteration (and every
/// accumulation built on it) is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseVector<K, T = f64> {
    entries: BTreeMap<K, T>,
}

impl<K: Ord, T> SparseVector<K, T> {
    /// Creates an empty vector; every key reads as zero.
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Inserts or overwrites the entry at `key`, returning the previously stored value.
    pub fn set(&mut self, key: K, value: T) -> Option<T> {
        self.entries.insert(key, value)
    }

    /// Whether `key` is explicitly stored (a stored zero counts).
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Number of explicitly stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, T> {
        self.entries.iter()
    }
}

impl<K: Ord, T: Copy + Zero> SparseVector<K, T> {
    /// Stored value at `key`, or zero if nothing is stored there. Never inserts.
    pub fn get<Q>(&self, key: &Q) -> T
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key).copied().unwrap_or_else(T::zero)
    }

    /// Adds `delta` to the entry at `key` (zero if absent) and stores the result.
    pub fn accumulate(&mut self, key: K, delta: T) -> T {
        let slot = self.entries.entry(key).or_insert_with(T::zero);
        *slot = *slot + delta;
        *slot
    }
}

impl<K: Ord, T> Default for SparseVector<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, T> FromIterator<(K, T)> for SparseVector<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<K: Ord, T> Extend<(K, T)> for SparseVector<K, T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a, K, T> IntoIterator for &'a SparseVector<K, T> {
    type Item = (&'a K, &'a T);
    type IntoIter = btree_map::Iter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, T> IntoIterator for SparseVector<K, T> {
    type Item = (K, T);
    type IntoIter = btree_map::IntoIter<K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// One `key: value` line per stored entry.
impl<K: fmt::Display, T: fmt::Display> fmt::Display for SparseVector<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

/// A sparse matrix stored as a map from row key to [`SparseVector`].
///
/// Rows are created on first write and never on read; an absent row behaves as a
/// row of zeros.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseMatrix<R, C, T = f64> {
    rows: BTreeMap<R, SparseVector<C, T>>,
}

impl<R: Ord, C: Ord, T> SparseMatrix<R, C, T> {
    pub fn new() -> Self {
        Self { rows: BTreeMap::new() }
    }

    /// Inserts or overwrites entry `(row, col)`, creating the row if needed.
    pub fn set(&mut self, row: R, col: C, value: T) -> Option<T> {
        self.rows.entry(row).or_default().set(col, value)
    }

    /// Replaces the whole row, returning the previous one. An empty `values` still
    /// creates a stored (all-zero) row.
    pub fn insert_row(&mut self, row: R, values: SparseVector<C, T>) -> Option<SparseVector<C, T>> {
        self.rows.insert(row, values)
    }

    /// The stored row, if any.
    pub fn row<Q>(&self, row: &Q) -> Option<&SparseVector<C, T>>
    where
        R: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.rows.get(row)
    }

    /// Number of stored rows.
    pub fn nrows_stored(&self) -> usize {
        self.rows.len()
    }

    /// Number of explicitly stored entries across all rows.
    pub fn nnz(&self) -> usize {
        self.rows.values().map(SparseVector::nnz).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the stored rows in ascending row order.
    pub fn rows(&self) -> btree_map::Iter<'_, R, SparseVector<C, T>> {
        self.rows.iter()
    }

    /// Iterates over the stored `(row, col, value)` triples, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, &T)> + '_ {
        self.rows
            .iter()
            .flat_map(|(i, row)| row.iter().map(move |(j, a_ij)| (i, j, a_ij)))
    }
}

impl<R: Ord, C: Ord, T: Copy + Zero> SparseMatrix<R, C, T> {
    /// Stored value at `(row, col)`, or zero. Never creates rows or entries.
    pub fn get<Q, P>(&self, row: &Q, col: &P) -> T
    where
        R: Borrow<Q>,
        C: Borrow<P>,
        Q: Ord + ?Sized,
        P: Ord + ?Sized,
    {
        self.rows.get(row).map_or_else(T::zero, |r| r.get(col))
    }

    /// Adds `delta` to entry `(row, col)` and stores the result.
    pub fn accumulate(&mut self, row: R, col: C, delta: T) -> T {
        self.rows.entry(row).or_default().accumulate(col, delta)
    }
}

impl<R: Ord, C: Ord, T> Default for SparseMatrix<R, C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Ord, C: Ord, T> FromIterator<((R, C), T)> for SparseMatrix<R, C, T> {
    fn from_iter<I: IntoIterator<Item = ((R, C), T)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<R: Ord, C: Ord, T> Extend<((R, C), T)> for SparseMatrix<R, C, T> {
    fn extend<I: IntoIterator<Item = ((R, C), T)>>(&mut self, iter: I) {
        for ((i, j), a_ij) in iter {
            self.set(i, j, a_ij);
        }
    }
}

/// One `[row, col]: value` line per stored entry.
impl<R: fmt::Display, C: fmt::Display, T: fmt::Display> fmt::Display for SparseMatrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in &self.rows {
            for (j, a_ij) in row {
                writeln!(f, "[{i}, {j}]: {a_ij}")?;
            }
        }
        Ok(())
    }
}

impl<T: Copy> SparseRows<T> for SparseMatrix<usize, usize, T> {
    fn nnz(&self) -> usize {
        self.rows.values().map(SparseVector::nnz).sum()
    }

    fn try_for_each_row<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(usize, &mut dyn Iterator<Item = (usize, T)>) -> Result<(), E>,
    {
        for (&i, row) in &self.rows {
            let mut entries = row.iter().map(|(&j, &a_ij)| (j, a_ij));
            f(i, &mut entries)?;
        }
        Ok(())
    }
}
