use std::fmt;

/// Failure modes of the kernel, matching the error taxonomy in spec.md §7.
///
/// `etree` returns [`KernelError::EmptyColumn`] or [`KernelError::LowerTriangleEntry`]
/// on malformed input (the reference's `-1`) or [`KernelError::CountOverflow`]
/// (the reference's `-2`). `factor` returns [`KernelError::ZeroPivot`] (the
/// reference's `-1`) on a singular matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Column `col` of `triu(A)` has no entries at all.
    EmptyColumn(usize),
    /// Column `col` of `triu(A)` contains a row index below the diagonal.
    LowerTriangleEntry {
        /// Column with the offending entry.
        col: usize,
        /// Row index found below the diagonal (`row > col`).
        row: usize,
    },
    /// `sum(Lnz)` would exceed the range of the index type.
    CountOverflow,
    /// Column `k`'s pivot evaluated to exactly zero; `A` is not `LDL^T`-factorable
    /// in the given elimination order.
    ZeroPivot {
        /// Column whose pivot vanished.
        col: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KernelError::EmptyColumn(col) => {
                write!(f, "column {col} of triu(A) is empty")
            }
            KernelError::LowerTriangleEntry { col, row } => {
                write!(f, "entry ({row}, {col}) lies below the diagonal of triu(A)")
            }
            KernelError::CountOverflow => {
                write!(f, "sum(Lnz) overflows the index type")
            }
            KernelError::ZeroPivot { col } => {
                write!(f, "pivot at column {col} is exactly zero")
            }
        }
    }
}

impl std::error::Error for KernelError {}
