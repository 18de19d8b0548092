#[cfg(not(feature = "f64"))]
pub type F = f32;

#[cfg(feature = "f64")]
pub type F = f64;

/// Constructor for a given sparsity pattern
mod builder;
pub use builder::{BuilderInsertError, SparsityPattern, SparsityPatternBuilder};

/// Compressed Sparse Matrix.
mod cs;

/// Compressed Sparse Column Matrix
pub mod csc;
pub use csc::Csc;

/// Failure modes shared by every kernel entry point.
mod error;
pub use error::KernelError;

/// Symbolic elimination tree construction.
mod etree;
pub use etree::etree;

/// Numeric `L D L^T` factorization.
mod factor;
pub use factor::{factor, Workspace};

/// Sparse forward/backward triangular solves against `L`, and their
/// composition into a solve of `Ax = b`.
mod triangular;
pub use triangular::{lsolve, ltsolve, solve};

/// Owned, ergonomic wrapper around the allocation-free kernel.
mod ldl;
pub use ldl::LdlFactorization;
