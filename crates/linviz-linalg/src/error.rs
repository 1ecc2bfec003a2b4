/// An error type for the solve module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The target is not a linear combination of the supplied basis columns.
    #[error("system is inconsistent: residual norm {residual} after reduction")]
    Inconsistent {
        /// Euclidean norm of `A·x - b` for the extracted solution.
        residual: f64,
    },

    /// More unknowns than a system over 3-dimensional space can carry.
    #[error("too many unknowns for a 3-dimensional system: {0}")]
    TooManyUnknowns(usize),
}
