pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied grid structure is not a rectangular matrix with at
    /// least one fillable cell. Raised at puzzle construction only.
    #[error("malformed structure: {0}")]
    MalformedStructure(String),

    /// The cooperative search budget ran out before the search concluded.
    /// Distinct from the no-solution outcome, which is not an error.
    #[error("search step limit of {0} exceeded")]
    StepLimitExceeded(u64),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
