//! Rank of an ordered set of 3D vectors.
//!
//! The rank is computed by Gaussian elimination with partial pivoting on a
//! working matrix with one row per vector and 3 columns. Partial pivoting
//! (picking the remaining row with the largest absolute entry in the current
//! column) keeps the elimination numerically stable and makes tie-breaking
//! deterministic, which downstream basis and dependency analysis relies on.

use crate::PIVOT_EPS;
use glam::DVec3;

/// Compute the rank of the subspace spanned by `vectors`.
///
/// The input is copied into a working matrix; the caller's data is never
/// mutated.
///
/// # Arguments
///
/// * `vectors` - An ordered set of 3D vectors.
///
/// # Returns
///
/// The dimension of the spanned subspace, in `0..=3`.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_linalg::rank::rank;
///
/// let vectors = [
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
/// ];
/// assert_eq!(rank(&vectors), 2);
/// ```
pub fn rank(vectors: &[DVec3]) -> usize {
    if vectors.is_empty() {
        return 0;
    }

    let mut mat: Vec<[f64; 3]> = vectors.iter().map(|v| v.to_array()).collect();
    let rows = mat.len();
    let mut rank = 0;
    let mut pivot_row = 0;

    for col in 0..3 {
        if pivot_row >= rows {
            break;
        }

        // Partial pivoting: largest absolute entry among the remaining rows.
        let mut max_row = pivot_row;
        let mut max_val = mat[pivot_row][col].abs();
        for (i, row) in mat.iter().enumerate().skip(pivot_row + 1) {
            let val = row[col].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        // No significant pivot: the column adds no rank.
        if max_val < PIVOT_EPS {
            continue;
        }

        mat.swap(pivot_row, max_row);

        for i in (pivot_row + 1)..rows {
            let factor = mat[i][col] / mat[pivot_row][col];
            for j in col..3 {
                mat[i][j] -= factor * mat[pivot_row][j];
            }
        }

        pivot_row += 1;
        rank += 1;
    }

    rank
}

/// Compute the rank of `vectors` extended by one extra vector, without the
/// caller having to build the extended set.
///
/// Equivalent to `rank` on the concatenation of `vectors` and `[extra]`.
pub fn rank_with(vectors: &[DVec3], extra: DVec3) -> usize {
    let mut extended = Vec::with_capacity(vectors.len() + 1);
    extended.extend_from_slice(vectors);
    extended.push(extra);
    rank(&extended)
}
