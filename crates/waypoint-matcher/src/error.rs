//! Pattern error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Empty capture name in pattern: {0}")]
    EmptyCaptureName(String),

    #[error("Wildcard must be the last segment: {0}")]
    MisplacedWildcard(String),

    #[error("Duplicate capture `{name}` in pattern: {pattern}")]
    DuplicateCapture { pattern: String, name: String },
}
