/// Why tab generation failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("context cancelled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
    #[error("generating tabs for {object}: {reason}")]
    Generate { object: String, reason: String },
    /// Returned by the fake when a call matched no expectation.
    #[cfg(feature = "fake")]
    #[error(transparent)]
    Double(#[from] mockctl::Failure),
}
