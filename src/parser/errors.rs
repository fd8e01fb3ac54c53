use thiserror::Error;
use crate::lexer::Position;

/// Parser error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected type but found '{0}' at {1}")]
    ExpectedType(String, Position),

    #[error("Expected variable but found '{0}' at {1}")]
    ExpectedVariable(String, Position),

    #[error("Expected semicolon after declaration but found '{0}' at {1}")]
    ExpectedSemicolon(String, Position),

    /// The type or the variable of a declaration was missing; `causes`
    /// holds the production errors in the order they were hit.
    #[error("Incomplete declaration at {pos}")]
    IncompleteDeclaration {
        pos: Position,
        causes: Vec<ParseError>,
    },
}

impl ParseError {
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            ParseError::ExpectedType(_, pos)
            | ParseError::ExpectedVariable(_, pos)
            | ParseError::ExpectedSemicolon(_, pos)
            | ParseError::IncompleteDeclaration { pos, .. } => *pos,
        }
    }
}
