//! Model error taxonomy.

use thiserror::Error;

/// Failures from model fitting at startup.
///
/// Request handling never produces these: malformed request fields fall
/// back to their defaults instead of erroring.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid training data: {0}")]
    InvalidTrainingData(String),

    #[error("singular design matrix: {0}")]
    Singular(String),
}
