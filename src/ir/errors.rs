use thiserror::Error;
use crate::lexer::Position;

/// IR lowering error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LowerError {
    #[error("IR record limit of {0} exceeded")]
    TooManyRecords(usize),

    #[error("Unsupported expression node type '{0}' at {1}")]
    UnsupportedExpression(String, Position),
}
