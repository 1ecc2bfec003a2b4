//! Greedy basis extraction.

use glam::DVec3;
use linviz_linalg::rank::{rank, rank_with};
use linviz_linalg::ZERO_VEC_EPS;

/// Select a linearly independent subsequence of `vectors` spanning the same
/// subspace.
///
/// Vectors are inspected in input order and kept exactly when they grow the
/// rank of the set kept so far; near-zero vectors are skipped. The selection
/// is deterministic and input-order dependent: the first independent vectors
/// encountered win. The result has length `rank(vectors)`.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_span::basis::basis;
///
/// let vectors = [
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(2.0, 0.0, 0.0), // collinear with the first, dropped
///     DVec3::new(0.0, 1.0, 0.0),
/// ];
/// let b = basis(&vectors);
/// assert_eq!(b, vec![vectors[0], vectors[2]]);
/// ```
pub fn basis(vectors: &[DVec3]) -> Vec<DVec3> {
    let mut basis: Vec<DVec3> = Vec::new();

    for &v in vectors {
        if v.length() < ZERO_VEC_EPS {
            continue;
        }

        if rank_with(&basis, v) > rank(&basis) {
            basis.push(v);
        }

        // Maximum possible rank in 3-space.
        if basis.len() == 3 {
            break;
        }
    }

    basis
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_basis_empty() {
        assert!(basis(&[]).is_empty());
    }

    #[test]
    fn test_basis_skips_zero_vectors() {
        let vectors = [DVec3::ZERO, DVec3::new(0.0, 3.0, 0.0), DVec3::ZERO];
        assert_eq!(basis(&vectors), vec![vectors[1]]);
    }

    #[test]
    fn test_basis_skips_near_zero_vectors() {
        let tiny = DVec3::splat(1e-8);
        assert!(basis(&[tiny]).is_empty());
    }

    #[test]
    fn test_basis_keeps_first_independent_vectors() {
        let vectors = [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0), // in the span of the first two
            DVec3::new(0.0, 0.0, 5.0),
        ];
        assert_eq!(basis(&vectors), vec![vectors[0], vectors[1], vectors[3]]);
    }

    #[test]
    fn test_basis_stops_at_rank_three() {
        let vectors = [
            DVec3::X,
            DVec3::Y,
            DVec3::Z,
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(-1.0, 2.0, 0.5),
        ];
        assert_eq!(basis(&vectors).len(), 3);
    }

    #[test]
    fn test_basis_rank_matches_input_rank() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let len = rng.random_range(0..7);
            let vectors: Vec<DVec3> = (0..len)
                .map(|_| {
                    DVec3::new(
                        rng.random_range(-10.0..10.0),
                        rng.random_range(-10.0..10.0),
                        rng.random_range(-10.0..10.0),
                    )
                })
                .collect();
            let b = basis(&vectors);
            assert_eq!(rank(&b), rank(&vectors));
            assert_eq!(b.len(), rank(&vectors));
        }
    }
}
