use crate::error::KernelError;
use crate::F;

/// Caller-owned scratch space for [`factor`], partitioned as three `n`-long
/// integer arrays, one `n`-long dense float accumulator, and one `n`-long
/// boolean marker array (spec §4.2). Kept as separate named slices rather
/// than one `3n`-long buffer, per spec §9: "An implementation may choose to
/// keep these as three separate named buffers rather than one partitioned
/// buffer; this is equivalent and more readable."
pub struct Workspace<'a> {
    /// `USED`/`UNUSED` marker per column index, tracking membership in `y_idx`.
    y_markers: &'a mut [bool],
    /// Sparse row pattern of the row of `L` currently being computed, in
    /// topologically ascending order.
    y_idx: &'a mut [usize],
    /// Scratch path up the elimination tree, filled descending and drained
    /// in reverse into `y_idx`.
    elim_buffer: &'a mut [usize],
    /// Write cursor into each column of `L`.
    l_next_space_in_col: &'a mut [usize],
    /// Dense accumulator holding the current row of `L` being solved.
    y_vals: &'a mut [F],
}

impl<'a> Workspace<'a> {
    /// Builds a workspace view over caller-owned buffers, each of length `n`.
    ///
    /// # Panics
    ///
    /// Panics if the five slices do not all have the same length.
    pub fn new(
        y_markers: &'a mut [bool],
        y_idx: &'a mut [usize],
        elim_buffer: &'a mut [usize],
        l_next_space_in_col: &'a mut [usize],
        y_vals: &'a mut [F],
    ) -> Self {
        let n = y_markers.len();
        assert_eq!(y_idx.len(), n, "y_idx must have length n");
        assert_eq!(elim_buffer.len(), n, "elim_buffer must have length n");
        assert_eq!(
            l_next_space_in_col.len(),
            n,
            "l_next_space_in_col must have length n"
        );
        assert_eq!(y_vals.len(), n, "y_vals must have length n");
        Self {
            y_markers,
            y_idx,
            elim_buffer,
            l_next_space_in_col,
            y_vals,
        }
    }

    /// True once every marker is `UNUSED` and every accumulator slot is zero —
    /// the workspace-cleanliness invariant spec §8 requires after `factor`
    /// returns, whether it succeeded or failed partway through a column.
    pub fn is_clean(&self) -> bool {
        self.y_markers.iter().all(|&used| !used) && self.y_vals.iter().all(|&v| v == 0.0)
    }
}

/// Numerically computes `L`, `D`, and `Dinv` from `triu(A)`, the elimination
/// tree, and the per-column fill counts produced by [`crate::etree`].
///
/// `lnz`/`etree` are the outputs of `etree` and are not modified. `lp` must
/// have length `n + 1`; `li`/`lx` must have length `sum(lnz)`, the value
/// `etree` returned. `d`/`dinv` must have length `n`.
///
/// Returns the number of strictly positive entries of `D` (the inertia
/// indicator of spec §3) on success, or [`KernelError::ZeroPivot`] the
/// moment any pivot evaluates to exactly zero — at which point `L`, `D`,
/// and `Dinv` are left in an undefined, partially written state and must be
/// discarded by the caller (spec §7).
pub fn factor(
    n: usize,
    ap: &[usize],
    ai: &[usize],
    ax: &[F],
    lnz: &[usize],
    etree: &[Option<usize>],
    lp: &mut [usize],
    li: &mut [usize],
    lx: &mut [F],
    d: &mut [F],
    dinv: &mut [F],
    ws: &mut Workspace<'_>,
) -> Result<usize, KernelError> {
    debug_assert_eq!(ap.len(), n + 1);
    debug_assert_eq!(lnz.len(), n);
    debug_assert_eq!(etree.len(), n);
    debug_assert_eq!(lp.len(), n + 1);
    debug_assert_eq!(d.len(), n);
    debug_assert_eq!(dinv.len(), n);

    if n == 0 {
        lp[0] = 0;
        return Ok(0);
    }

    lp[0] = 0;
    for i in 0..n {
        lp[i + 1] = lp[i] + lnz[i];
        ws.y_markers[i] = false;
        ws.y_vals[i] = 0.0;
        d[i] = 0.0;
        ws.l_next_space_in_col[i] = lp[i];
    }

    let mut positive_count = 0usize;

    d[0] = ax[ap[0]];
    if d[0] == 0.0 {
        log::warn!("factor: zero pivot at column 0");
        return Err(KernelError::ZeroPivot { col: 0 });
    }
    if d[0] > 0.0 {
        positive_count += 1;
    }
    dinv[0] = 1.0 / d[0];

    for k in 1..n {
        let mut nnz_y = 0usize;

        for p in ap[k]..ap[k + 1] {
            let bidx = ai[p];

            if bidx == k {
                d[k] = ax[p];
                continue;
            }

            ws.y_vals[bidx] = ax[p];

            if !ws.y_markers[bidx] {
                ws.y_markers[bidx] = true;
                ws.elim_buffer[0] = bidx;
                let mut nnz_e = 1usize;

                let mut next_idx = etree[bidx];
                while let Some(ni) = next_idx {
                    if ni >= k || ws.y_markers[ni] {
                        break;
                    }
                    ws.y_markers[ni] = true;
                    ws.elim_buffer[nnz_e] = ni;
                    nnz_e += 1;
                    next_idx = etree[ni];
                }

                while nnz_e > 0 {
                    nnz_e -= 1;
                    ws.y_idx[nnz_y] = ws.elim_buffer[nnz_e];
                    nnz_y += 1;
                }
            }
        }

        for i in (0..nnz_y).rev() {
            let cidx = ws.y_idx[i];

            let next_space = ws.l_next_space_in_col[cidx];
            let y_cidx = ws.y_vals[cidx];

            for j in lp[cidx]..next_space {
                let row = li[j];
                ws.y_vals[row] -= lx[j] * y_cidx;
            }

            li[next_space] = k;
            lx[next_space] = y_cidx * dinv[cidx];
            d[k] -= y_cidx * lx[next_space];
            ws.l_next_space_in_col[cidx] += 1;

            ws.y_vals[cidx] = 0.0;
            ws.y_markers[cidx] = false;
        }

        if d[k] == 0.0 {
            log::warn!("factor: zero pivot at column {k}");
            return Err(KernelError::ZeroPivot { col: k });
        }
        if d[k] > 0.0 {
            positive_count += 1;
        }
        dinv[k] = 1.0 / d[k];
    }

    log::trace!("factor: n={n} positive_in_d={positive_count}");
    Ok(positive_count)
}
