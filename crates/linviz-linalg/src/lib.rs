#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the elimination primitives.
pub mod error;

/// Rank computation via Gaussian elimination with partial pivoting.
pub mod rank;

/// Linear system solving via Gauss–Jordan reduction.
pub mod solve;

/// Pivot significance threshold. A column whose best pivot candidate is below
/// this in absolute value contributes no rank and is skipped during
/// elimination.
pub const PIVOT_EPS: f64 = 1e-9;

/// A vector with Euclidean norm below this is treated as the zero vector and
/// contributes nothing to any span.
pub const ZERO_VEC_EPS: f64 = 1e-6;

/// Rounding threshold for coefficients, separating values ≈0, ≈1 and ≈-1
/// from the general case when reading solutions and formatting output.
pub const COEFF_EPS: f64 = 1e-4;
