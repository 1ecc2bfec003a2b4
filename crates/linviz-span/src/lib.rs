#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Greedy basis extraction from an ordered vector set.
pub mod basis;

/// Linear independence and dependency decomposition.
pub mod independence;

/// Gram–Schmidt orthogonalization.
pub mod orthogonal;

/// Orthogonal projection and basis-relative coordinates.
pub mod project;

/// Span membership tests.
pub mod span;
