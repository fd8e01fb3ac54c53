use crate::lexer::{Position, Token, TokenKind};
use crate::parser::{Declaration, ParseError, Program, TokenCursor, TypeName, Variable};
use log::{debug, trace, warn};

/// Result of the tree-building pass.
///
/// Malformed declarations are left out of `program` and reported in
/// `errors`; the declarations around them are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parsed {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

/// Recursive-descent parser building the declaration AST
pub struct Parser<'t> {
    cursor: TokenCursor<'t>,
}

impl<'t> Parser<'t> {
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
        }
    }

    /// Parse every declaration up to the end of the tokens
    pub fn parse_program(&mut self) -> Parsed {
        let mut parsed = Parsed::default();

        while !self.cursor.is_at_end() {
            match self.parse_declaration() {
                Ok(decl) => {
                    trace!("declaration {} {}", decl.ty.lexeme, decl.variable.name);
                    parsed.program.declarations.push(decl);
                }
                Err(err) => {
                    warn!("{err}");
                    parsed.errors.push(err);
                }
            }
        }

        debug!(
            "built {} declarations, {} discarded",
            parsed.program.declarations.len(),
            parsed.errors.len()
        );
        parsed
    }

    /// Parse `Type Variable ;`
    ///
    /// Always consumes at least one token, so callers can loop on it.
    /// # Errors
    /// `IncompleteDeclaration` if the type or variable is missing,
    /// `ExpectedSemicolon` if only the terminator is
    pub fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let start = self.cursor.index();
        let pos = self.cursor.current_pos();

        let result = self.declaration_body(pos);
        if result.is_err() {
            if let Some(skipped) = self.cursor.ensure_progress(start) {
                trace!("skipping '{}' at {}", skipped.lexeme, skipped.pos);
            }
        }
        result
    }

    fn declaration_body(&mut self, pos: Position) -> Result<Declaration, ParseError> {
        let ty = self.parse_type();
        let variable = self.parse_variable();

        let (ty, variable) = match (ty, variable) {
            (Ok(ty), Ok(variable)) => (ty, variable),
            (ty, variable) => {
                let causes = [ty.err(), variable.err()].into_iter().flatten().collect();
                return Err(ParseError::IncompleteDeclaration { pos, causes });
            }
        };

        if self.cursor.eat(TokenKind::Semicolon).is_none() {
            return Err(ParseError::ExpectedSemicolon(
                self.cursor.found(),
                self.cursor.current_pos(),
            ));
        }

        Ok(Declaration { ty, variable })
    }

    /// `Type -> Keyword`
    /// # Errors
    /// `ExpectedType` without consuming anything
    pub fn parse_type(&mut self) -> Result<TypeName, ParseError> {
        match self.cursor.eat(TokenKind::Keyword) {
            Some(token) => Ok(TypeName {
                lexeme: token.lexeme.clone(),
                pos: token.pos,
            }),
            None => Err(ParseError::ExpectedType(
                self.cursor.found(),
                self.cursor.current_pos(),
            )),
        }
    }

    /// `Variable -> Identifier`
    /// # Errors
    /// `ExpectedVariable` without consuming anything
    pub fn parse_variable(&mut self) -> Result<Variable, ParseError> {
        match self.cursor.eat(TokenKind::Identifier) {
            Some(token) => Ok(Variable {
                name: token.lexeme.clone(),
                pos: token.pos,
            }),
            None => Err(ParseError::ExpectedVariable(
                self.cursor.found(),
                self.cursor.current_pos(),
            )),
        }
    }
}

/// Build the AST for a token slice
#[must_use]
pub fn parse(tokens: &[Token]) -> Parsed {
    Parser::new(tokens).parse_program()
}
