//! Dense vectors and their elementwise arithmetic.
//!
//! A [`DenseVector`] owns a `Vec<T>` whose length is fixed at construction. The
//! arithmetic methods are pure: each returns a new vector and leaves its operands
//! untouched. Binary operations check lengths and report [`LaError::LengthMismatch`]
//! rather than truncating to the shorter operand.

use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice;

use num_traits::{Float, Zero};

use crate::error::LaError;

/// Fixed-length vector indexed `0..n`.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseVector<T = f64> {
    data: Vec<T>,
}

impl<T> DenseVector<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn check_len(&self, other: &Self) -> Result<(), LaError> {
        if self.len() != other.len() {
            return Err(LaError::LengthMismatch { left: self.len(), right: other.len() });
        }
        Ok(())
    }
}

impl<T: Copy> DenseVector<T> {
    /// Vector of length `n` with every entry set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        Self { data: vec![value; n] }
    }

    /// Entry `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        self.data.iter().map(|&xi| f(xi)).collect()
    }
}

impl<T: Copy + Zero> DenseVector<T> {
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, T::zero())
    }
}

impl<T: Copy + Mul<Output = T>> DenseVector<T> {
    /// Returns `alpha · x`.
    pub fn scale(&self, alpha: T) -> Self {
        self.map(|xi| xi * alpha)
    }
}

impl<T: Copy + Add<Output = T>> DenseVector<T> {
    /// Returns `x + c` with `c` added to every entry.
    pub fn add_scalar(&self, c: T) -> Self {
        self.map(|xi| xi + c)
    }
}

impl<T: Copy + Sub<Output = T>> DenseVector<T> {
    /// Returns `x - y`. Both operands must have the same length.
    pub fn subtract(&self, other: &Self) -> Result<Self, LaError> {
        self.check_len(other)?;
        Ok(self.data.iter().zip(&other.data).map(|(&xi, &yi)| xi - yi).collect())
    }
}

impl<T: Copy + Zero + Mul<Output = T>> DenseVector<T> {
    /// Inner product `xᵀ y`. Both operands must have the same length.
    pub fn dot(&self, other: &Self) -> Result<T, LaError> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&xi, &yi)| acc + xi * yi))
    }
}

impl<T: Float> DenseVector<T> {
    /// Euclidean norm `‖x‖₂`; zero for an empty vector.
    pub fn norm2(&self) -> T {
        self.data
            .iter()
            .map(|&xi| xi * xi)
            .fold(T::zero(), |acc, v| acc + v)
            .sqrt()
    }
}

impl<T> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for DenseVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T> AsRef<[T]> for DenseVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for DenseVector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<'a, T> IntoIterator for &'a DenseVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
