//! Capacity bounds for one compilation run.

/// Fixed upper bounds on every buffer the pipeline fills.
///
/// The defaults match the reduced grammar's scale: a hundred tokens, a
/// hundred symbols and IR records, and lexemes that fit a 50-byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_tokens: usize,
    pub max_symbols: usize,
    pub max_lexeme_len: usize,
    pub max_ir_records: usize,
}

impl Limits {
    pub const DEFAULT_MAX_TOKENS: usize = 100;
    pub const DEFAULT_MAX_SYMBOLS: usize = 100;
    pub const DEFAULT_MAX_LEXEME_LEN: usize = 49;
    pub const DEFAULT_MAX_IR_RECORDS: usize = 100;

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn with_max_symbols(mut self, max_symbols: usize) -> Self {
        self.max_symbols = max_symbols;
        self
    }

    #[must_use]
    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len;
        self
    }

    #[must_use]
    pub fn with_max_ir_records(mut self, max_ir_records: usize) -> Self {
        self.max_ir_records = max_ir_records;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            max_symbols: Self::DEFAULT_MAX_SYMBOLS,
            max_lexeme_len: Self::DEFAULT_MAX_LEXEME_LEN,
            max_ir_records: Self::DEFAULT_MAX_IR_RECORDS,
        }
    }
}
