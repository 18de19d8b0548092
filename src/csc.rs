use super::F;

use super::cs::{CsBuilder, CsMatrix};
use super::{BuilderInsertError, SparsityPattern};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Csc<T>(CsMatrix<T>);

impl<T> Csc<T> {
    pub fn ncols(&self) -> usize {
        self.0.pattern.major_dim()
    }
    pub fn nrows(&self) -> usize {
        self.0.pattern.minor_dim
    }
    pub fn col_iter(
        &self,
        i: usize,
    ) -> impl Iterator<Item = (usize, &T)> + DoubleEndedIterator + '_ {
        self.0.lane_iter(i)
    }
    pub fn pattern(&self) -> &SparsityPattern {
        &self.0.pattern
    }

    pub fn col(&self, i: usize) -> (&[T], &[usize]) {
        self.0.lane(i)
    }

    pub fn values(&self) -> &[T] {
        self.0.values()
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        self.0.values_mut()
    }
    /// Constructs a CSC matrix from a set of triples. Fails if there are duplicate entries.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        t: &mut [([usize; 2], T)],
    ) -> Result<Self, BuilderInsertError>
    where
        T: Copy,
    {
        let mut builder = CscBuilder::new(rows, cols);
        t.sort_unstable_by_key(|a| a.0);
        for &([x, y], v) in t.iter() {
            builder.insert(y, x, v)?;
        }
        Ok(builder.build())
    }

    pub fn from_btreemap(
        rows: usize,
        cols: usize,
        map: &std::collections::BTreeMap<[usize; 2], T>,
    ) -> Result<Self, BuilderInsertError>
    where
        T: Copy,
    {
        let mut builder = CscBuilder::new(rows, cols);
        for (&[x, y], &v) in map.iter() {
            builder.insert(y, x, v)?;
        }
        Ok(builder.build())
    }
}

impl Csc<F> {
    pub fn identity(n: usize) -> Self {
        Csc(CsMatrix::identity(n))
    }
}

/// An incremental builder for a Csc matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CscBuilder<T>(CsBuilder<T>);

impl<T> CscBuilder<T> {
    /// Constructs a new instance of a Csc Builder.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self(CsBuilder::new(cols, rows))
    }
    /// Convert back from a matrix to a CscBuilder.
    #[inline]
    pub fn from_mat(mat: Csc<T>) -> Self {
        Self(CsBuilder::from_mat(mat.0))
    }
    /// Backtracks back to column `col`, deleting all entries ahead of it.
    pub fn revert_to_col(&mut self, col: usize) -> bool {
        self.0.revert_to_major(col)
    }
    /// Inserts a value into the builder. Must be called in ascending col, row order.
    pub fn insert(&mut self, row: usize, col: usize, val: T) -> Result<(), BuilderInsertError> {
        self.0.insert(col, row, val)
    }
    /// Converts this builder into a valid Csc.
    pub fn build(self) -> Csc<T> {
        Csc(self.0.build())
    }
}
