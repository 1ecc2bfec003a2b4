//! Classical Gram–Schmidt orthogonalization.

use glam::DVec3;
use linviz_linalg::{PIVOT_EPS, ZERO_VEC_EPS};

/// Orthogonalize `vectors` with classical Gram–Schmidt.
///
/// Each input vector has its projections onto the already-accepted
/// orthogonal vectors subtracted; the projection coefficients use the
/// original input vector, not the partially reduced remainder. What is left
/// is kept only if it still has significant norm, so dependent inputs are
/// dropped and the output length equals the rank of the input. The outputs
/// are pairwise orthogonal and span the same subspace as the input.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_span::orthogonal::gram_schmidt;
///
/// let u = gram_schmidt(&[DVec3::new(1.0, 1.0, 0.0), DVec3::new(1.0, 0.0, 0.0)]);
/// assert_eq!(u[0], DVec3::new(1.0, 1.0, 0.0));
/// assert_eq!(u[1], DVec3::new(0.5, -0.5, 0.0));
/// ```
pub fn gram_schmidt(vectors: &[DVec3]) -> Vec<DVec3> {
    let mut orthogonal: Vec<DVec3> = Vec::new();

    for &v in vectors {
        let mut u = v;
        for &b in &orthogonal {
            let denom = b.dot(b);
            if denom > PIVOT_EPS {
                u -= (v.dot(b) / denom) * b;
            }
        }

        // A remainder with no significant norm means v was fully dependent
        // on the accepted vectors.
        if u.length() > ZERO_VEC_EPS {
            orthogonal.push(u);
        }
    }

    orthogonal
}
