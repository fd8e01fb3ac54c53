use thiserror::Error;

/// Position in source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexer error types
///
/// `UnknownCharacter` and `UnterminatedString` are recoverable and collected
/// as diagnostics; the capacity variants abort the scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Unknown character '{0}' at {1}")]
    UnknownCharacter(char, Position),

    #[error("Unterminated string literal at {0}")]
    UnterminatedString(Position),

    #[error("Token limit of {0} exceeded at {1}")]
    TooManyTokens(usize, Position),

    #[error("Symbol table limit of {0} exceeded at {1}")]
    SymbolTableFull(usize, Position),

    #[error("Lexeme longer than {0} characters at {1}")]
    LexemeTooLong(usize, Position),
}

impl LexerError {
    /// Whether the scan can continue past this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LexerError::UnknownCharacter(..) | LexerError::UnterminatedString(_)
        )
    }

    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            LexerError::UnknownCharacter(_, pos)
            | LexerError::UnterminatedString(pos)
            | LexerError::TooManyTokens(_, pos)
            | LexerError::SymbolTableFull(_, pos)
            | LexerError::LexemeTooLong(_, pos) => *pos,
        }
    }
}
