//! Span membership tests.

use glam::DVec3;
use linviz_linalg::rank::{rank, rank_with};
use linviz_linalg::PIVOT_EPS;

/// Whether `target` lies in the span of `basis_vectors`.
///
/// The span of the empty set is the origin alone, so an empty basis matches
/// only (near-)zero targets. Otherwise the target is in the span exactly
/// when appending it does not grow the rank.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_span::span::is_in_span;
///
/// let plane = [DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0)];
/// assert!(is_in_span(&plane, DVec3::new(1.0, 1.0, 0.0)));
/// assert!(!is_in_span(&plane, DVec3::new(1.0, 1.0, 1.0)));
/// ```
pub fn is_in_span(basis_vectors: &[DVec3], target: DVec3) -> bool {
    if basis_vectors.is_empty() {
        return target.abs().max_element() < PIVOT_EPS;
    }
    rank_with(basis_vectors, target) == rank(basis_vectors)
}
