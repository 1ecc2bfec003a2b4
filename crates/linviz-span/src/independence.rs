//! Linear independence and dependency decomposition.
//!
//! Dependency relations are produced by a single left-to-right pass over the
//! input, mirroring how a reader inspects vectors one at a time: each vector
//! either joins the running independent set or is decomposed over the
//! vectors accepted before it. The result is order-dependent by design, not
//! a canonical decomposition.

use glam::DVec3;
use linviz_linalg::rank::{rank, rank_with};
use linviz_linalg::solve::solve;
use linviz_linalg::{COEFF_EPS, ZERO_VEC_EPS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One term of a linear combination: a coefficient applied to the vector at
/// a 1-based input index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// The coefficient. Values within [`COEFF_EPS`] of zero are never stored.
    pub coefficient: f64,
    /// 1-based index of the referenced vector in the original input.
    pub index: usize,
}

/// How one input vector relates to the vectors accepted before it.
///
/// Indices are 1-based positions in the original input, matching the
/// `v1, v2, …` labels a visualizer displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DependencyRelation {
    /// The vector is (near-)zero and contributes nothing to any span.
    ZeroVector {
        /// 1-based input index of the zero vector.
        index: usize,
    },
    /// The vector is an exact combination of earlier accepted vectors.
    Combination {
        /// 1-based input index of the dependent vector.
        index: usize,
        /// Nonzero terms of the combination, over earlier accepted vectors.
        terms: Vec<Term>,
    },
    /// The vector is dependent but no coefficients could be recovered.
    Dependent {
        /// 1-based input index of the dependent vector.
        index: usize,
    },
}

impl fmt::Display for DependencyRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyRelation::ZeroVector { index } => {
                write!(f, "v{index} is the zero vector")
            }
            DependencyRelation::Combination { index, terms } => {
                write!(f, "v{index} = ")?;
                if terms.is_empty() {
                    return write!(f, "0");
                }
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}v{}", format_coefficient(term.coefficient), term.index)?;
                }
                Ok(())
            }
            DependencyRelation::Dependent { index } => {
                write!(f, "v{index} is dependent")
            }
        }
    }
}

/// Render a coefficient prefix: nothing for ≈1, a bare minus for ≈-1,
/// otherwise the value rounded to two decimals (trailing zeros trimmed)
/// followed by `*`.
fn format_coefficient(c: f64) -> String {
    if (c - 1.0).abs() < COEFF_EPS {
        String::new()
    } else if (c + 1.0).abs() < COEFF_EPS {
        "-".to_string()
    } else {
        let rounded = format!("{c:.2}");
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        format!("{trimmed}*")
    }
}

/// Whether the vectors are linearly independent.
///
/// More than 3 vectors in 3-space are always dependent, so that case returns
/// `false` without running elimination. The empty set is independent.
pub fn is_linearly_independent(vectors: &[DVec3]) -> bool {
    if vectors.len() > 3 {
        return false;
    }
    rank(vectors) == vectors.len()
}

/// Decompose each dependent vector over the independent vectors seen before
/// it.
///
/// Vectors are processed in input order against a running `accepted` set:
/// near-zero vectors yield a [`DependencyRelation::ZeroVector`] entry and
/// are neither accepted nor decomposed; vectors that do not grow the rank
/// are solved against the accepted set and yield a
/// [`DependencyRelation::Combination`]; all others join the accepted set
/// silently. Independent inputs therefore produce an empty result.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use linviz_span::independence::dependency_relations;
///
/// let vectors = [
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
/// ];
/// let relations = dependency_relations(&vectors);
/// assert_eq!(relations.len(), 1);
/// assert_eq!(relations[0].to_string(), "v3 = v1 + v2");
/// ```
pub fn dependency_relations(vectors: &[DVec3]) -> Vec<DependencyRelation> {
    let mut relations = Vec::new();
    let mut accepted: Vec<(DVec3, usize)> = Vec::new();

    for (i, &v) in vectors.iter().enumerate() {
        let index = i + 1;

        if v.length() < ZERO_VEC_EPS {
            relations.push(DependencyRelation::ZeroVector { index });
            continue;
        }

        if accepted.is_empty() {
            accepted.push((v, index));
            continue;
        }

        let current: Vec<DVec3> = accepted.iter().map(|&(vec, _)| vec).collect();
        if rank_with(&current, v) == rank(&current) {
            match solve(&current, v) {
                Ok(coefficients) => {
                    let terms = coefficients
                        .iter()
                        .zip(&accepted)
                        .filter(|(c, _)| c.abs() >= COEFF_EPS)
                        .map(|(&coefficient, &(_, index))| Term { coefficient, index })
                        .collect();
                    relations.push(DependencyRelation::Combination { index, terms });
                }
                Err(_) => relations.push(DependencyRelation::Dependent { index }),
            }
        } else {
            accepted.push((v, index));
        }
    }

    relations
}
