use crate::config::Limits;
use crate::lexer::{CharStream, Keyword, LexerError, Position, Token, TokenKind};
use crate::symbol::SymbolTable;
use log::{debug, trace, warn};

/// Everything the lexical phase produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    /// Recoverable errors, in source order
    pub diagnostics: Vec<LexerError>,
}

pub struct Scanner<I: Iterator<Item = char>> {
    stream: CharStream<I>,
    limits: Limits,
    tokens: Vec<Token>,
    symbols: SymbolTable,
    diagnostics: Vec<LexerError>,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(chars: I, limits: Limits) -> Self {
        Self {
            stream: CharStream::new(chars),
            limits,
            tokens: Vec::new(),
            symbols: SymbolTable::with_capacity(limits.max_symbols),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole stream.
    /// # Errors
    /// Fails only when a capacity limit is exceeded; unknown characters and
    /// unterminated strings end up in `Lexed::diagnostics`.
    pub fn scan_all(mut self) -> Result<Lexed, LexerError> {
        loop {
            let start_pos = self.stream.position();
            let Some(ch) = self.stream.next_char() else {
                break;
            };

            if let Some(token) = self.scan_token(ch, start_pos)? {
                self.push_token(token)?;
            }
        }

        debug!(
            "lexed {} tokens, {} symbols, {} diagnostics",
            self.tokens.len(),
            self.symbols.len(),
            self.diagnostics.len()
        );

        Ok(Lexed {
            tokens: self.tokens,
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        })
    }

    fn push_token(&mut self, token: Token) -> Result<(), LexerError> {
        if self.tokens.len() >= self.limits.max_tokens {
            return Err(LexerError::TooManyTokens(self.limits.max_tokens, token.pos));
        }
        trace!("{} at {}", token, token.pos);
        self.tokens.push(token);
        Ok(())
    }

    fn report(&mut self, error: LexerError) {
        warn!("{error}");
        self.diagnostics.push(error);
    }

    fn scan_token(&mut self, ch: char, start_pos: Position) -> Result<Option<Token>, LexerError> {
        let token = match ch {
            ' ' | '\n' | '\r' => return Ok(None),

            ch if ch.is_ascii_alphabetic() => self.scan_identifier_or_keyword(ch, start_pos)?,

            ch if ch.is_ascii_digit() => self.scan_number(ch, start_pos)?,

            '<' | '>' | '=' | '!' => {
                let mut lexeme = String::from(ch);
                if self.stream.match_char('=') {
                    lexeme.push('=');
                }
                Token::new(TokenKind::RelationalOperator, start_pos, lexeme)
            }

            '"' => self.scan_string_literal(start_pos)?,

            ch => match TokenKind::from_single_char(ch) {
                Some(kind) => Token::new(kind, start_pos, ch.to_string()),
                None => {
                    self.report(LexerError::UnknownCharacter(ch, start_pos));
                    return Ok(None);
                }
            },
        };

        Ok(Some(token))
    }

    fn scan_identifier_or_keyword(&mut self, first: char, start_pos: Position) -> Result<Token, LexerError> {
        let mut text = String::from(first);
        self.stream
            .take_while_into(&mut text, |c| c.is_ascii_alphanumeric() || c == '_');
        self.check_lexeme(&text, start_pos)?;

        if Keyword::from_str(&text).is_some() {
            return Ok(Token::new(TokenKind::Keyword, start_pos, text));
        }

        if self.symbols.insert(&text, start_pos).is_err() {
            return Err(LexerError::SymbolTableFull(self.symbols.capacity(), start_pos));
        }
        Ok(Token::new(TokenKind::Identifier, start_pos, text))
    }

    fn scan_number(&mut self, first: char, start_pos: Position) -> Result<Token, LexerError> {
        let mut text = String::from(first);
        self.stream.take_while_into(&mut text, |c| c.is_ascii_digit());
        self.check_lexeme(&text, start_pos)?;
        Ok(Token::new(TokenKind::Integer, start_pos, text))
    }

    /// Escapes are copied verbatim: `"a\"b"` keeps its backslash.
    fn scan_string_literal(&mut self, start_pos: Position) -> Result<Token, LexerError> {
        let mut lexeme = String::from('"');
        let mut terminated = false;

        while let Some(ch) = self.stream.next_char() {
            lexeme.push(ch);
            match ch {
                '"' => {
                    terminated = true;
                    break;
                }
                '\\' => match self.stream.next_char() {
                    Some(escaped) => lexeme.push(escaped),
                    None => break,
                },
                _ => {}
            }
        }

        if !terminated {
            self.report(LexerError::UnterminatedString(start_pos));
        }
        self.check_lexeme(&lexeme, start_pos)?;
        Ok(Token::new(TokenKind::StringLiteral, start_pos, lexeme))
    }

    fn check_lexeme(&self, lexeme: &str, start_pos: Position) -> Result<(), LexerError> {
        if lexeme.chars().count() > self.limits.max_lexeme_len {
            return Err(LexerError::LexemeTooLong(self.limits.max_lexeme_len, start_pos));
        }
        Ok(())
    }
}

/// Tokenize with the default limits
/// # Errors
/// See [`Scanner::scan_all`]
pub fn tokenize(input: &str) -> Result<Lexed, LexerError> {
    tokenize_with_limits(input, Limits::default())
}

/// Tokenize with explicit limits
/// # Errors
/// See [`Scanner::scan_all`]
pub fn tokenize_with_limits(input: &str, limits: Limits) -> Result<Lexed, LexerError> {
    Scanner::new(input.chars(), limits).scan_all()
}
