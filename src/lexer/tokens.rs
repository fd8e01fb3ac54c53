use crate::lexer::Position;
use std::fmt;

/// Language keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    If,
    Else,
    While,
    For,
    Int,
    Float,
    Char,
    Return,
    Break,
    Continue,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::For => "for",
            Keyword::Int => "int",
            Keyword::Float => "float",
            Keyword::Char => "char",
            Keyword::Return => "return",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
        };
        write!(f, "{}", s)
    }
}

impl Keyword {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "if" => Some(Keyword::If),
            "else" => Some(Keyword::Else),
            "while" => Some(Keyword::While),
            "for" => Some(Keyword::For),
            "int" => Some(Keyword::Int),
            "float" => Some(Keyword::Float),
            "char" => Some(Keyword::Char),
            "return" => Some(Keyword::Return),
            "break" => Some(Keyword::Break),
            "continue" => Some(Keyword::Continue),
            _ => None,
        }
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    RelationalOperator, // < <= > >= = == ! !=
    StringLiteral,
    Semicolon,          // ;
    LeftParen,          // (
    RightParen,         // )
    LeftBrace,          // {
    RightBrace,         // }
    Slash,              // /
    Backslash,          // \
}

impl TokenKind {
    /// Kind of a one-character punctuation token, if `ch` is one.
    pub fn from_single_char(ch: char) -> Option<Self> {
        match ch {
            ';' => Some(TokenKind::Semicolon),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            '/' => Some(TokenKind::Slash),
            '\\' => Some(TokenKind::Backslash),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "KEYWORD"),
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
            TokenKind::Integer => write!(f, "INTEGER"),
            TokenKind::RelationalOperator => write!(f, "RELATIONAL_OPERATOR"),
            TokenKind::StringLiteral => write!(f, "STRING"),
            TokenKind::Semicolon => write!(f, "SEMICOLON"),
            TokenKind::LeftParen => write!(f, "LEFT_PAREN"),
            TokenKind::RightParen => write!(f, "RIGHT_PAREN"),
            TokenKind::LeftBrace => write!(f, "LEFT_BRACE"),
            TokenKind::RightBrace => write!(f, "RIGHT_BRACE"),
            TokenKind::Slash => write!(f, "SLASH"),
            TokenKind::Backslash => write!(f, "BACKSLASH"),
        }
    }
}

/// A token with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, pos: Position, lexeme: String) -> Self {
        Self { kind, pos, lexeme }
    }

    /// The keyword this token spells, for `Keyword` tokens.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_str(&self.lexeme),
            _ => None,
        }
    }
}

/// Trace form used by the lexical phase listing, e.g. `<KEYWORD, int>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.lexeme)
    }
}
