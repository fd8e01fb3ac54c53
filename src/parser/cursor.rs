use crate::lexer::{Position, Token, TokenKind};

/// Read position over a lexed token slice, shared by both parser passes
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    current: usize,
}

impl<'t> TokenCursor<'t> {
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    /// Index of the next unread token
    #[must_use]
    pub fn index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Peek at current token without consuming it
    #[must_use]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Advance to next token
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Check if current token matches a kind
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Consume the current token if it has the given kind
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.check(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Lexeme of the current token, for error messages
    #[must_use]
    pub fn found(&self) -> String {
        match self.peek() {
            Some(token) => token.lexeme.clone(),
            None => "end of input".to_string(),
        }
    }

    /// Position of the current token, or of the last one at end of input
    #[must_use]
    pub fn current_pos(&self) -> Position {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or_else(Position::start, |t| t.pos)
    }

    /// Skip one token if nothing was consumed since `start`.
    ///
    /// Returns the skipped token. Every failed production goes through here
    /// so the program loop always terminates.
    pub fn ensure_progress(&mut self, start: usize) -> Option<&'t Token> {
        if self.current == start {
            self.advance()
        } else {
            None
        }
    }
}
