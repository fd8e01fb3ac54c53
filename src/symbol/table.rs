use crate::lexer::Position;
use std::fmt;

/// One identifier occurrence recorded by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub lexeme: String,
    pub pos: Position,
}

/// Append-only table of identifiers in the order they were scanned.
///
/// Repeated names are recorded again; `int a; int a;` yields two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    capacity: usize,
}

impl SymbolTable {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record an identifier
    /// # Errors
    /// Returns the rejected entry if the table is already at capacity
    pub fn insert(&mut self, lexeme: &str, pos: Position) -> Result<(), SymbolEntry> {
        let entry = SymbolEntry {
            lexeme: lexeme.to_string(),
            pos,
        };
        if self.entries.len() >= self.capacity {
            return Err(entry);
        }
        self.entries.push(entry);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    /// Lexemes in insertion order
    #[must_use]
    pub fn lexemes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.lexeme.as_str()).collect()
    }
}

/// Numbered listing, one entry per line: `1: x`
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}: {}", i + 1, entry.lexeme)?;
        }
        Ok(())
    }
}
