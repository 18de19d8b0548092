use crate::error::KernelError;

/// Builds the elimination tree and per-column subdiagonal nonzero counts of `L`
/// from the sparsity pattern of `triu(A)`.
///
/// `ap`/`ai` are the column pointers and row indices of `triu(A)` in CSC form
/// (see spec §3): row indices within a column must be sorted ascending and
/// `ai[p] <= j` for every entry `p` in column `j`. The diagonal need not be
/// the last entry of its column — a missing or misplaced diagonal is
/// permitted here and surfaces later as a zero pivot in [`crate::factor`]
/// (the less strict of the two behaviors documented by the reference
/// implementation; see spec §9).
///
/// `work` is `n`-long scratch with no meaning on return. `lnz` and `etree`
/// are fully populated on success with, respectively, the count of
/// strict-lower-triangle nonzeros in each column of `L` and each column's
/// parent in the elimination forest (`None` at a root).
///
/// Returns `sum(lnz)`, the total nonzero count `L` must be sized to hold.
pub fn etree(
    n: usize,
    ap: &[usize],
    ai: &[usize],
    work: &mut [usize],
    lnz: &mut [usize],
    etree: &mut [Option<usize>],
) -> Result<usize, KernelError> {
    debug_assert_eq!(ap.len(), n + 1);
    debug_assert_eq!(work.len(), n);
    debug_assert_eq!(lnz.len(), n);
    debug_assert_eq!(etree.len(), n);

    for i in 0..n {
        work[i] = 0;
        lnz[i] = 0;
        etree[i] = None;

        if ap[i] == ap[i + 1] {
            return Err(KernelError::EmptyColumn(i));
        }
    }

    for j in 0..n {
        work[j] = j;

        for p in ap[j]..ap[j + 1] {
            let mut i = ai[p];

            if i > j {
                return Err(KernelError::LowerTriangleEntry { col: j, row: i });
            }

            while work[i] != j {
                if etree[i].is_none() {
                    etree[i] = Some(j);
                }
                lnz[i] += 1;
                work[i] = j;
                // Guaranteed `Some` here: `etree[i]` was just set above, or was
                // already `Some` from an earlier column's walk.
                i = etree[i].unwrap();
            }
        }
    }

    let mut sum_lnz = 0usize;
    for &count in lnz.iter() {
        sum_lnz = sum_lnz.checked_add(count).ok_or(KernelError::CountOverflow)?;
    }

    log::trace!("etree: n={n} sum(Lnz)={sum_lnz}");
    Ok(sum_lnz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_column() {
        let ap = [0, 0, 1];
        let ai = [0];
        let mut work = [0; 2];
        let mut lnz = [0; 2];
        let mut etree_out = [None; 2];
        let err = etree(2, &ap, &ai, &mut work, &mut lnz, &mut etree_out).unwrap_err();
        assert_eq!(err, KernelError::EmptyColumn(0));
    }

    #[test]
    fn rejects_lower_triangle_entry() {
        // column 0 has an entry at row 1, which is below the diagonal.
        let ap = [0, 2, 3];
        let ai = [0, 1, 1];
        let mut work = [0; 2];
        let mut lnz = [0; 2];
        let mut etree_out = [None; 2];
        let err = etree(2, &ap, &ai, &mut work, &mut lnz, &mut etree_out).unwrap_err();
        assert_eq!(err, KernelError::LowerTriangleEntry { col: 0, row: 1 });
    }

    #[test]
    fn identity_has_no_fill() {
        let n = 5;
        let ap: Vec<usize> = (0..=n).collect();
        let ai: Vec<usize> = (0..n).collect();
        let mut work = vec![0; n];
        let mut lnz = vec![0; n];
        let mut etree_out = vec![None; n];
        let sum_lnz = etree(n, &ap, &ai, &mut work, &mut lnz, &mut etree_out).unwrap();
        assert_eq!(sum_lnz, 0);
        assert!(lnz.iter().all(|&c| c == 0));
        assert!(etree_out.iter().all(|p| p.is_none()));
    }

    #[test]
    fn basic_10x10_matches_reference_pattern() {
        // Matrix from spec.md §8 scenario 2.
        let ap = [0, 1, 2, 4, 5, 6, 8, 10, 12, 14, 17];
        let ai = [0, 1, 1, 2, 3, 4, 1, 5, 0, 6, 3, 7, 6, 8, 1, 2, 9];
        let n = 10;
        let mut work = vec![0; n];
        let mut lnz = vec![0; n];
        let mut etree_out = vec![None; n];
        let sum_lnz = etree(n, &ap, &ai, &mut work, &mut lnz, &mut etree_out).unwrap();
        assert_eq!(sum_lnz, lnz.iter().sum::<usize>());
        // etree[i] is always a strictly larger column, or a root.
        for (i, parent) in etree_out.iter().enumerate() {
            if let Some(p) = parent {
                assert!(*p > i);
            }
        }
    }
}
