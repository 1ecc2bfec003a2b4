//! Orthogonal projection onto a spanned subspace and basis-relative
//! coordinates.

use crate::basis::basis;
use glam::DVec3;
use linviz_linalg::rank::rank;
use linviz_linalg::solve::solve;
use serde::{Deserialize, Serialize};

/// Minimum norm for a vector to serve as the direction of a rank-1 span.
const DIRECTION_EPS: f64 = 1e-5;

/// Basis-relative coordinates of a target's projection onto a spanned
/// subspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Coefficients aligned with `basis_used`, one per basis vector.
    pub coordinates: Vec<f64>,
    /// The independent subsequence the coefficients refer to.
    pub basis_used: Vec<DVec3>,
}

/// Orthogonally project `target` onto the subspace spanned by
/// `basis_vectors`.
///
/// Dispatches on the rank of the spanning set: rank 0 projects to the
/// origin, rank 1 onto the line through the first usable vector, rank 2
/// onto the plane (by removing the component along the plane normal), and
/// rank 3 returns the target unchanged. The difference `target - projection`
/// is orthogonal to every spanning vector.
///
/// Returns `None` only when an internal precondition is violated: a
/// positive rank was computed but no vector with norm above the direction
/// threshold exists to realize it.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_span::project::project;
///
/// let plane = [DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0)];
/// let p = project(&plane, DVec3::new(1.0, 1.0, 1.0)).unwrap();
/// assert_eq!(p, DVec3::new(1.0, 1.0, 0.0));
/// ```
pub fn project(basis_vectors: &[DVec3], target: DVec3) -> Option<DVec3> {
    match rank(basis_vectors) {
        0 => Some(DVec3::ZERO),
        1 => {
            let direction = basis_vectors
                .iter()
                .find(|v| v.length() > DIRECTION_EPS)?;
            let u = direction.normalize();
            Some(u * target.dot(u))
        }
        2 => {
            let plane = basis(basis_vectors);
            if plane.len() < 2 {
                return None;
            }
            let normal = plane[0].cross(plane[1]).normalize();
            Some(target - normal * target.dot(normal))
        }
        // Rank 3 spans all of 3-space.
        _ => Some(target),
    }
}

/// Express the projection of `target` in coordinates over the independent
/// subsequence of `basis_vectors`.
///
/// Extracts a basis first, so redundant or zero input vectors never carry a
/// coordinate. Returns `None` when the extracted basis is empty (no
/// meaningful coordinate system exists).
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_span::project::coordinates;
///
/// let axes = [DVec3::X, DVec3::Y, DVec3::Z];
/// let c = coordinates(&axes, DVec3::new(2.0, 3.0, 4.0)).unwrap();
/// assert_eq!(c.coordinates, vec![2.0, 3.0, 4.0]);
/// ```
pub fn coordinates(basis_vectors: &[DVec3], target: DVec3) -> Option<Coordinates> {
    let basis_used = basis(basis_vectors);
    if basis_used.is_empty() {
        return None;
    }

    let projection = project(&basis_used, target)?;

    // The projection lies in the span of an independent basis, so the solve
    // cannot fail on the guarded path.
    let coords = solve(&basis_used, projection).ok()?;

    Some(Coordinates {
        coordinates: coords,
        basis_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_project_empty_basis() {
        assert_eq!(project(&[], DVec3::new(1.0, 2.0, 3.0)), Some(DVec3::ZERO));
    }

    #[test]
    fn test_project_onto_line() {
        let line = [DVec3::new(2.0, 0.0, 0.0)];
        let p = project(&line, DVec3::new(3.0, 4.0, 5.0)).unwrap();
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_onto_plane() {
        let plane = [DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0)];
        let p = project(&plane, DVec3::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(p, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_project_full_rank_is_identity() {
        let full = [DVec3::X, DVec3::Y, DVec3::Z];
        let target = DVec3::new(2.0, 3.0, 4.0);
        assert_eq!(project(&full, target), Some(target));
    }

    #[test]
    fn test_project_skewed_plane_residual_is_orthogonal() {
        let plane = [DVec3::new(1.0, 1.0, 0.0), DVec3::new(0.0, 1.0, 1.0)];
        let target = DVec3::new(3.0, -2.0, 5.0);
        let p = project(&plane, target).unwrap();
        let residual = target - p;
        assert_relative_eq!(residual.dot(plane[0]), 0.0, epsilon = 1e-9);
        assert_relative_eq!(residual.dot(plane[1]), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_line_residual_is_orthogonal() {
        let line = [DVec3::new(1.0, 2.0, -1.0)];
        let target = DVec3::new(4.0, 0.5, 2.0);
        let p = project(&line, target).unwrap();
        assert_relative_eq!((target - p).dot(line[0]), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_redundant_spanning_set() {
        // Three coplanar vectors still span only the xy plane.
        let plane = [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        ];
        let p = project(&plane, DVec3::new(2.0, 3.0, 4.0)).unwrap();
        assert_eq!(p, DVec3::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn test_coordinates_standard_basis() {
        let axes = [DVec3::X, DVec3::Y, DVec3::Z];
        let c = coordinates(&axes, DVec3::new(2.0, 3.0, 4.0)).unwrap();
        assert_eq!(c.coordinates, vec![2.0, 3.0, 4.0]);
        assert_eq!(c.basis_used, axes.to_vec());
    }

    #[test]
    fn test_coordinates_empty_basis() {
        assert!(coordinates(&[], DVec3::X).is_none());
        assert!(coordinates(&[DVec3::ZERO], DVec3::X).is_none());
    }

    #[test]
    fn test_coordinates_drop_redundant_vectors() {
        let vectors = [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0), // collinear, not part of the basis
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let c = coordinates(&vectors, DVec3::new(3.0, 4.0, 0.0)).unwrap();
        assert_eq!(c.basis_used, vec![vectors[0], vectors[2]]);
        assert_eq!(c.coordinates.len(), 2);
        assert_relative_eq!(c.coordinates[0], 3.0, epsilon = 1e-9);
        assert_relative_eq!(c.coordinates[1], 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_coordinates_recombine_to_projection() {
        let vectors = [DVec3::new(1.0, 1.0, 0.0), DVec3::new(0.0, 1.0, 1.0)];
        let target = DVec3::new(2.0, -1.0, 3.0);
        let c = coordinates(&vectors, target).unwrap();
        let recombined = c
            .coordinates
            .iter()
            .zip(&c.basis_used)
            .fold(DVec3::ZERO, |acc, (&x, &b)| acc + x * b);
        let p = project(&c.basis_used, target).unwrap();
        assert_relative_eq!(recombined.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(recombined.y, p.y, epsilon = 1e-9);
        assert_relative_eq!(recombined.z, p.z, epsilon = 1e-9);
    }
}
