//! Solving small linear systems by Gauss–Jordan reduction.
//!
//! The system `x_1·b_1 + … + x_k·b_k = t` (k ≤ 3 basis vectors, one target)
//! is written as a 3×(k+1) augmented matrix with the basis vectors as
//! columns and reduced all the way to reduced row-echelon form, so the
//! solution can be read directly off the augmented column.

use crate::error::SolveError;
use crate::{COEFF_EPS, PIVOT_EPS};
use glam::DVec3;

/// Residual norm above which an extracted solution is rejected as
/// inconsistent.
const RESIDUAL_EPS: f64 = 1e-6;

/// Solve `x_1·basis[0] + … + x_k·basis[k-1] = target` for the coefficients.
///
/// The basis vectors are expected to be linearly independent and the target
/// to lie in their span; both are what the guarded call paths (span
/// membership first, solve second) guarantee. Unlike plain RREF extraction,
/// the recombined solution is checked against the target, so violating the
/// contract fails loudly instead of yielding meaningless coefficients.
///
/// # Arguments
///
/// * `basis` - Up to 3 column vectors of the system.
/// * `target` - The right-hand side.
///
/// # Returns
///
/// Coefficients in the same order as `basis`.
///
/// # Errors
///
/// * [`SolveError::TooManyUnknowns`] if more than 3 basis vectors are given.
/// * [`SolveError::Inconsistent`] if the target is not a combination of the
///   basis vectors (within tolerance).
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_linalg::solve::solve;
///
/// let basis = [DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.0)];
/// let coeffs = solve(&basis, DVec3::new(2.0, -3.0, 0.0)).unwrap();
/// assert_eq!(coeffs, vec![2.0, -3.0]);
/// ```
pub fn solve(basis: &[DVec3], target: DVec3) -> Result<Vec<f64>, SolveError> {
    let num_vars = basis.len();
    if num_vars > 3 {
        return Err(SolveError::TooManyUnknowns(num_vars));
    }
    if num_vars == 0 {
        // The empty combination only reaches the origin.
        let residual = target.length();
        if residual > RESIDUAL_EPS {
            return Err(SolveError::Inconsistent { residual });
        }
        return Ok(Vec::new());
    }

    // Augmented matrix: 3 equations, num_vars unknowns plus the target column.
    let mut mat = [[0.0f64; 4]; 3];
    for (c, b) in basis.iter().enumerate() {
        let column = b.to_array();
        for (r, row) in mat.iter_mut().enumerate() {
            row[c] = column[r];
        }
    }
    let rhs = target.to_array();
    for (r, row) in mat.iter_mut().enumerate() {
        row[num_vars] = rhs[r];
    }

    let mut pivot_row = 0;
    for col in 0..num_vars {
        if pivot_row >= 3 {
            break;
        }

        let mut max_row = pivot_row;
        let mut max_val = mat[pivot_row][col].abs();
        for (i, row) in mat.iter().enumerate().skip(pivot_row + 1) {
            let val = row[col].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        // Only happens for dependent basis columns; the column stays free.
        if max_val < PIVOT_EPS {
            continue;
        }

        mat.swap(pivot_row, max_row);

        let pivot = mat[pivot_row][col];
        for j in col..=num_vars {
            mat[pivot_row][j] /= pivot;
        }

        // Full reduction: clear the column in every other row, not just the
        // ones below, so solutions can be read off the augmented column.
        for i in 0..3 {
            if i == pivot_row {
                continue;
            }
            let factor = mat[i][col];
            for j in col..=num_vars {
                mat[i][j] -= factor * mat[pivot_row][j];
            }
        }

        pivot_row += 1;
    }

    // Per variable column, the pivot row carries a 1; its augmented entry is
    // the coefficient. Free columns keep coefficient 0.
    let mut solution = vec![0.0f64; num_vars];
    for (c, x) in solution.iter_mut().enumerate() {
        if let Some(row) = mat.iter().find(|row| (row[c] - 1.0).abs() < COEFF_EPS) {
            *x = row[num_vars];
        }
    }

    let recombined = solution
        .iter()
        .zip(basis)
        .fold(DVec3::ZERO, |acc, (&x, &b)| acc + x * b);
    let residual = (recombined - target).length();
    if residual > RESIDUAL_EPS {
        return Err(SolveError::Inconsistent { residual });
    }

    Ok(solution)
}
