//! One run of the whole pipeline, from source text to assembly lines.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::codegen::generate_assembly;
use crate::config::Limits;
use crate::ir::{lower, IrRecord, LowerError};
use crate::lexer::{tokenize_with_limits, LexerError, Token};
use crate::parser::{parse, recognize, ParseError, Program, Recognition};
use crate::symbol::SymbolTable;

/// Errors that stop a run before it produces a [`Compilation`]
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lexical analysis failed: {0}")]
    Lexer(#[from] LexerError),

    #[error("intermediate code generation failed: {0}")]
    Lower(#[from] LowerError),
}

/// Every phase's output for one source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub lex_diagnostics: Vec<LexerError>,
    pub recognition: Recognition,
    pub program: Program,
    pub parse_errors: Vec<ParseError>,
    pub ir: Vec<IrRecord>,
    pub assembly: Vec<String>,
}

impl Compilation {
    /// True if any phase reported a recoverable error
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.lex_diagnostics.is_empty()
            || !self.recognition.is_valid()
            || !self.parse_errors.is_empty()
    }
}

/// Compile with the default limits
/// # Errors
/// See [`compile_with_limits`]
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    compile_with_limits(source, &Limits::default())
}

/// Run lexing, validation, AST building, lowering and emission in order.
/// # Errors
/// Only capacity overflows are fatal; everything else is reported in the
/// returned [`Compilation`].
pub fn compile_with_limits(source: &str, limits: &Limits) -> Result<Compilation, CompileError> {
    let lexed = tokenize_with_limits(source, *limits)?;
    let recognition = recognize(&lexed.tokens);
    let parsed = parse(&lexed.tokens);
    let ir = lower(&parsed.program, limits)?;
    let assembly = generate_assembly(&ir);

    info!(
        "compiled {} declarations into {} instructions",
        parsed.program.declarations.len(),
        assembly.len()
    );

    Ok(Compilation {
        tokens: lexed.tokens,
        symbols: lexed.symbols,
        lex_diagnostics: lexed.diagnostics,
        recognition,
        program: parsed.program,
        parse_errors: parsed.errors,
        ir,
        assembly,
    })
}

/// Read `path` and compile it
/// # Errors
/// `CompileError::Io` if the file cannot be read, otherwise as
/// [`compile_with_limits`]
pub fn compile_file(path: &Path, limits: &Limits) -> Result<Compilation, CompileError> {
    debug!("reading {}", path.display());
    let source = fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    compile_with_limits(&source, limits)
}
