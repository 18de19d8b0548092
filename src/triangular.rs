use crate::F;

/// Solves `(L + I) x = b` in place, where `L` is the strictly lower
/// triangular factor produced by [`crate::factor`] in CSC form (`lp`/`li`/`lx`).
///
/// `x` holds `b` on entry and the solution on return. Column `i` of `L` is
/// applied to every row below it before moving to column `i + 1`, so each
/// entry of `x` is finalized exactly once it is reached.
pub fn lsolve(n: usize, lp: &[usize], li: &[usize], lx: &[F], x: &mut [F]) {
    debug_assert_eq!(lp.len(), n + 1);
    debug_assert_eq!(x.len(), n);

    for i in 0..n {
        let val = x[i];
        for j in lp[i]..lp[i + 1] {
            x[li[j]] -= lx[j] * val;
        }
    }
}

/// Solves `(L + I)^T x = b` in place.
///
/// Walks columns of `L` from last to first, accumulating each row's
/// contribution from the rows below it before writing the finished entry.
pub fn ltsolve(n: usize, lp: &[usize], li: &[usize], lx: &[F], x: &mut [F]) {
    debug_assert_eq!(lp.len(), n + 1);
    debug_assert_eq!(x.len(), n);

    for i in (0..n).rev() {
        let mut val = x[i];
        for j in lp[i]..lp[i + 1] {
            val -= lx[j] * x[li[j]];
        }
        x[i] = val;
    }
}

/// Solves `Ax = b` given the `L`/`Dinv` factors of `A = L D L^T`, composing
/// the two triangular solves around a diagonal scale (spec §4.5):
/// `Lsolve` then `x *= Dinv` elementwise, then `Ltsolve`.
pub fn solve(n: usize, lp: &[usize], li: &[usize], lx: &[F], dinv: &[F], x: &mut [F]) {
    debug_assert_eq!(dinv.len(), n);

    lsolve(n, lp, li, lx, x);

    for i in 0..n {
        x[i] *= dinv[i];
    }

    ltsolve(n, lp, li, lx, x);
}
