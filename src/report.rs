//! Text rendering of a [`Compilation`], one banner per phase.

use std::io::{self, Write};

use crate::ir::IrRecord;
use crate::lexer::{LexerError, Token};
use crate::parser::{ParseError, Program, Recognition};
use crate::pipeline::Compilation;
use crate::symbol::SymbolTable;

pub const SEPARATOR: &str = "**************************************";

/// Write all five phases in order
pub fn write_report<W: Write>(out: &mut W, compilation: &Compilation) -> io::Result<()> {
    writeln!(out, "1.Lexical Analysis:")?;
    writeln!(out)?;
    write_token_trace(out, &compilation.tokens, &compilation.lex_diagnostics)?;
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out)?;
    writeln!(out, "2.Parsing:")?;
    writeln!(out)?;
    write_parse_trace(out, &compilation.recognition)?;
    writeln!(out, "Completed Parsing")?;
    writeln!(out, "{SEPARATOR}")?;

    write_symbol_table(out, &compilation.symbols)?;
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out)?;
    writeln!(out, "3.Semantic Analysis:")?;
    write_parse_errors(out, &compilation.parse_errors)?;
    write_ast(out, &compilation.program)?;
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out)?;
    writeln!(out, "4.Intermediate Code Generation:")?;
    write_ir(out, &compilation.ir)?;
    writeln!(out, "{SEPARATOR}")?;

    write_assembly(out, &compilation.assembly)?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

/// Render the full report into a string
pub fn report_to_string(compilation: &Compilation) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, compilation);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Tokens and lexical errors interleaved in source order
pub fn write_token_trace<W: Write>(
    out: &mut W,
    tokens: &[Token],
    diagnostics: &[LexerError],
) -> io::Result<()> {
    let mut lines: Vec<_> = tokens
        .iter()
        .map(|t| (t.pos, 0, t.to_string()))
        .chain(
            diagnostics
                .iter()
                .map(|d| (d.position(), 1, format!("Error: {d}"))),
        )
        .collect();
    lines.sort_by_key(|(pos, rank, _)| (*pos, *rank));

    for (_, _, line) in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn write_parse_trace<W: Write>(out: &mut W, recognition: &Recognition) -> io::Result<()> {
    for event in &recognition.events {
        writeln!(out, "{event}")?;
    }
    Ok(())
}

pub fn write_symbol_table<W: Write>(out: &mut W, symbols: &SymbolTable) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Symbol Table:")?;
    write!(out, "{symbols}")
}

/// Builder errors, each incomplete declaration preceded by its causes
pub fn write_parse_errors<W: Write>(out: &mut W, errors: &[ParseError]) -> io::Result<()> {
    for err in errors {
        if let ParseError::IncompleteDeclaration { causes, .. } = err {
            for cause in causes {
                writeln!(out, "Error: {cause}")?;
            }
        }
        writeln!(out, "Error: {err}")?;
    }
    Ok(())
}

pub fn write_ast<W: Write>(out: &mut W, program: &Program) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Abstract Syntax Tree (Tree Representation):")?;
    write!(out, "{program}")
}

/// Numbered three-address listing: `1: x = 0`
pub fn write_ir<W: Write>(out: &mut W, records: &[IrRecord]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Generated Intermediate Code:")?;
    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, record)?;
    }
    Ok(())
}

pub fn write_assembly<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "5.Generated Assembly Code:")?;
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
