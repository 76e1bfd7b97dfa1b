use thiserror::Error;

/// Errors produced by the estimation routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A domain bound, sample count, or grid resolution was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An estimate was requested before any observation was accumulated.
    #[error("estimate requested before any observation was accumulated")]
    DivisionUndefined,
    /// The integrand returned NaN or an infinity at the given point.
    #[error("integrand returned a non-finite value at {0:?}")]
    NonFiniteEvaluation(Vec<f64>),
}

pub type Result<T> = std::result::Result<T, Error>;
