use std::fs;
use std::path::Path;

use crate::codegen::CodegenError;
use crate::ir::{AsmOp, IrRecord};
use log::{debug, trace};

/// Emits one pseudo-assembly line per IR record
#[derive(Debug, Default)]
pub struct CodeGenerator {
    lines: Vec<String>,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every record, in order. Records with no assembly form become
    /// an `Unknown operation` line rather than an error.
    pub fn generate(&mut self, records: &[IrRecord]) {
        for record in records {
            let line = render(record);
            trace!("{line}");
            self.lines.push(line);
        }
        debug!("emitted {} assembly lines", self.lines.len());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print the listing to a string, one instruction per line
    pub fn print_to_string(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Write the listing to a file
    pub fn write_to_file(&self, path: &Path) -> Result<(), CodegenError> {
        fs::write(path, self.print_to_string())?;
        Ok(())
    }
}

/// `MOV x, 0`, `ADD t, a, b`, ...
pub fn render(record: &IrRecord) -> String {
    match record.op.asm_op() {
        Some(op @ (AsmOp::Move | AsmOp::Store | AsmOp::Load)) => {
            format!("{} {}, {}", op.mnemonic(), record.result, record.arg1)
        }
        Some(op @ (AsmOp::Add | AsmOp::Sub | AsmOp::Mul | AsmOp::Div)) => format!(
            "{} {}, {}, {}",
            op.mnemonic(),
            record.result,
            record.arg1,
            record.arg2
        ),
        None => "Unknown operation".to_string(),
    }
}

/// Emit the assembly listing for a record sequence
pub fn generate_assembly(records: &[IrRecord]) -> Vec<String> {
    let mut codegen = CodeGenerator::new();
    codegen.generate(records);
    codegen.into_lines()
}
