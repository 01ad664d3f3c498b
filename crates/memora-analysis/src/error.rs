use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The text was rejected before any state was touched.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Aggregation could not produce a result. The sample stays recorded but
    /// no snapshot is appended.
    #[error("analysis failed: {0}")]
    AnalysisFailure(String),

    #[error("unknown aggregation policy: {0}")]
    UnknownPolicy(String),

    #[error("invalid analyzer configuration: {0}")]
    InvalidConfig(String),
}
