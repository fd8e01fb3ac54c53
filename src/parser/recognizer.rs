//! Grammar validation pass.
//!
//! Walks the tokens with the declaration grammar and records what it
//! recognized, without building a tree:
//!
//! ```text
//! Program     -> Declaration*
//! Declaration -> Type Variable ';'
//! Type        -> Keyword
//! Variable    -> Identifier
//! ```

use crate::lexer::{Token, TokenKind};
use crate::parser::{ParseError, TokenCursor};
use log::{debug, trace, warn};
use std::fmt;

/// One step of the validation trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Type(String),
    Variable(String),
    Declaration,
    Error(ParseError),
}

impl fmt::Display for ParseEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseEvent::Type(lexeme) => write!(f, "Parsed: Type - {lexeme}"),
            ParseEvent::Variable(lexeme) => write!(f, "Parsed: Variable - {lexeme}"),
            ParseEvent::Declaration => write!(f, "Parsed: Declaration"),
            ParseEvent::Error(err) => write!(f, "Error: {err}"),
        }
    }
}

/// Verdict of the validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recognition {
    pub events: Vec<ParseEvent>,
}

impl Recognition {
    /// True when no production failed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ParseError> {
        self.events.iter().filter_map(|event| match event {
            ParseEvent::Error(err) => Some(err),
            _ => None,
        })
    }

    /// Number of declarations recognized in full
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ParseEvent::Declaration))
            .count()
    }
}

pub struct Recognizer<'t> {
    cursor: TokenCursor<'t>,
    events: Vec<ParseEvent>,
}

impl<'t> Recognizer<'t> {
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            events: Vec::new(),
        }
    }

    pub fn recognize_program(mut self) -> Recognition {
        while !self.cursor.is_at_end() {
            self.recognize_declaration();
        }

        let recognition = Recognition {
            events: self.events,
        };
        debug!(
            "recognized {} declarations, valid: {}",
            recognition.declaration_count(),
            recognition.is_valid()
        );
        recognition
    }

    /// Type and variable are both attempted even if the first one fails.
    fn recognize_declaration(&mut self) {
        let start = self.cursor.index();

        self.recognize_type();
        self.recognize_variable();

        if self.cursor.eat(TokenKind::Semicolon).is_some() {
            self.events.push(ParseEvent::Declaration);
        } else {
            self.error(ParseError::ExpectedSemicolon(
                self.cursor.found(),
                self.cursor.current_pos(),
            ));
        }

        if let Some(skipped) = self.cursor.ensure_progress(start) {
            trace!("skipping '{}' at {}", skipped.lexeme, skipped.pos);
        }
    }

    fn recognize_type(&mut self) {
        match self.cursor.eat(TokenKind::Keyword) {
            Some(token) => self.events.push(ParseEvent::Type(token.lexeme.clone())),
            None => self.error(ParseError::ExpectedType(
                self.cursor.found(),
                self.cursor.current_pos(),
            )),
        }
    }

    fn recognize_variable(&mut self) {
        match self.cursor.eat(TokenKind::Identifier) {
            Some(token) => self
                .events
                .push(ParseEvent::Variable(token.lexeme.clone())),
            None => self.error(ParseError::ExpectedVariable(
                self.cursor.found(),
                self.cursor.current_pos(),
            )),
        }
    }

    fn error(&mut self, err: ParseError) {
        warn!("{err}");
        self.events.push(ParseEvent::Error(err));
    }
}

/// Run the validation pass over a token slice
#[must_use]
pub fn recognize(tokens: &[Token]) -> Recognition {
    Recognizer::new(tokens).recognize_program()
}
