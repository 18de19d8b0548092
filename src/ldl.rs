use crate::csc::Csc;
use crate::error::KernelError;
use crate::etree::etree;
use crate::factor::{factor, Workspace};
use crate::triangular::{lsolve, ltsolve, solve};
use crate::F;

/// An owned, ready-to-solve `A = L D L^T` factorization.
///
/// This is the ergonomic counterpart to the allocation-free [`crate::etree`]
/// and [`crate::factor`] kernels: it owns its `Vec`-backed buffers and hides
/// the caller-managed [`Workspace`] behind [`LdlFactorization::new`]. Use the
/// free functions directly when the caller already owns suitably sized
/// buffers and wants to avoid the allocations this type performs once, at
/// construction time.
pub struct LdlFactorization {
    n: usize,
    lp: Vec<usize>,
    li: Vec<usize>,
    lx: Vec<F>,
    d: Vec<F>,
    dinv: Vec<F>,
    positive_in_d: usize,
}

impl LdlFactorization {
    /// Factors `triu(A)`, given as a square [`Csc`] holding only the upper
    /// triangle (spec §3's data contract).
    ///
    /// # Panics
    ///
    /// Panics if `a` is not square.
    pub fn new(a: &Csc<F>) -> Result<Self, KernelError> {
        assert_eq!(a.nrows(), a.ncols(), "LdlFactorization requires a square matrix");
        let n = a.nrows();
        let ap = &a.pattern().major_offsets;
        let ai = &a.pattern().minor_indices;
        let ax = a.values();

        let mut work = vec![0usize; n];
        let mut lnz = vec![0usize; n];
        let mut etree_out = vec![None; n];
        let sum_lnz = etree(n, ap, ai, &mut work, &mut lnz, &mut etree_out)?;

        let mut lp = vec![0usize; n + 1];
        let mut li = vec![0usize; sum_lnz];
        let mut lx = vec![0.0; sum_lnz];
        let mut d = vec![0.0; n];
        let mut dinv = vec![0.0; n];

        let mut y_markers = vec![false; n];
        let mut y_idx = vec![0usize; n];
        let mut elim_buffer = vec![0usize; n];
        let mut l_next_space_in_col = vec![0usize; n];
        let mut y_vals = vec![0.0; n];
        let mut ws = Workspace::new(
            &mut y_markers,
            &mut y_idx,
            &mut elim_buffer,
            &mut l_next_space_in_col,
            &mut y_vals,
        );

        let positive_in_d = factor(
            n, ap, ai, ax, &lnz, &etree_out, &mut lp, &mut li, &mut lx, &mut d, &mut dinv,
            &mut ws,
        )?;

        Ok(Self {
            n,
            lp,
            li,
            lx,
            d,
            dinv,
            positive_in_d,
        })
    }

    /// Solves `Ax = b`, overwriting `dst` with the solution.
    ///
    /// # Panics
    ///
    /// Panics if `b.len()` or `dst.len()` is not `n`.
    pub fn solve(&self, b: &[F], dst: &mut [F]) {
        assert_eq!(b.len(), self.n);
        assert_eq!(dst.len(), self.n);
        dst.copy_from_slice(b);
        solve(self.n, &self.lp, &self.li, &self.lx, &self.dinv, dst);
    }

    /// Solves `(L + I) x = b` in place, for callers that only need the
    /// forward triangular solve.
    pub fn lsolve(&self, x: &mut [F]) {
        assert_eq!(x.len(), self.n);
        lsolve(self.n, &self.lp, &self.li, &self.lx, x);
    }

    /// Solves `(L + I)^T x = b` in place, for callers that only need the
    /// backward triangular solve.
    pub fn ltsolve(&self, x: &mut [F]) {
        assert_eq!(x.len(), self.n);
        ltsolve(self.n, &self.lp, &self.li, &self.lx, x);
    }

    /// The diagonal factor `D`.
    pub fn d(&self) -> &[F] {
        &self.d
    }

    /// The precomputed `1 / D`, as used internally by [`Self::solve`].
    pub fn dinv(&self) -> &[F] {
        &self.dinv
    }

    /// Column pointers of the strictly lower triangular factor `L`.
    pub fn l_column_pointers(&self) -> &[usize] {
        &self.lp
    }

    /// Row indices of `L`, in CSC form alongside [`Self::l_column_pointers`].
    pub fn l_row_indices(&self) -> &[usize] {
        &self.li
    }

    /// Values of `L`, parallel to [`Self::l_row_indices`].
    pub fn l_values(&self) -> &[F] {
        &self.lx
    }

    /// The inertia indicator: the number of strictly positive entries in `D`
    /// (spec §3). For a quasi-definite `A` partitioned as `[[P, B], [B^T,
    /// -Q]]` with `P`, `Q` positive definite, this equals `dim(P)`.
    pub fn positive_in_d(&self) -> usize {
        self.positive_in_d
    }
}
