use crate::config::Limits;
use crate::ir::{IrRecord, LowerError};
use crate::parser::{Assignment, AstNode, Declaration, Expression, Program};
use log::{debug, trace};

/// Post-order AST walker that appends three-address records
pub struct IrBuilder {
    records: Vec<IrRecord>,
    max_records: usize,
}

impl IrBuilder {
    #[must_use]
    pub fn new(max_records: usize) -> Self {
        Self {
            records: Vec::new(),
            max_records,
        }
    }

    /// Lower a whole program, declarations in source order
    /// # Errors
    /// `TooManyRecords` once the record limit is hit
    pub fn lower_program(&mut self, program: &Program) -> Result<(), LowerError> {
        self.lower_node(program.as_node())?;
        debug!("lowered {} IR records", self.records.len());
        Ok(())
    }

    /// Dispatch on the node kind. Types and variables emit nothing on their
    /// own; they are read by the declaration that owns them.
    /// # Errors
    /// `TooManyRecords` once the record limit is hit
    pub fn lower_node(&mut self, node: AstNode<'_>) -> Result<(), LowerError> {
        match node {
            AstNode::Program(_) => {
                for child in node.children() {
                    self.lower_node(child)?;
                }
                Ok(())
            }
            AstNode::Declaration(decl) => self.lower_declaration(decl),
            AstNode::Type(_) | AstNode::Variable(_) => Ok(()),
        }
    }

    /// Every declared variable starts out as zero: `x = 0`
    /// # Errors
    /// `TooManyRecords` once the record limit is hit
    pub fn lower_declaration(&mut self, decl: &Declaration) -> Result<(), LowerError> {
        self.emit(IrRecord::assign(decl.variable.name.as_str(), "0"))
    }

    /// `target = value`, lowering the value first
    /// # Errors
    /// `UnsupportedExpression` for values other than variables and types,
    /// `TooManyRecords` once the record limit is hit
    pub fn lower_assignment(&mut self, assignment: &Assignment) -> Result<(), LowerError> {
        self.lower_expression(&assignment.value)?;
        self.emit(IrRecord::assign(
            assignment.target.name.as_str(),
            assignment.value.lexeme(),
        ))
    }

    /// Variables and types are used by name and need no code.
    /// # Errors
    /// `UnsupportedExpression` for anything else
    pub fn lower_expression(&mut self, expr: &Expression) -> Result<(), LowerError> {
        match expr {
            Expression::Variable(_) | Expression::Type(_) => Ok(()),
            Expression::Integer { value, pos } => {
                Err(LowerError::UnsupportedExpression(value.clone(), *pos))
            }
        }
    }

    fn emit(&mut self, record: IrRecord) -> Result<(), LowerError> {
        if self.records.len() >= self.max_records {
            return Err(LowerError::TooManyRecords(self.max_records));
        }
        trace!("{}: {}", self.records.len() + 1, record);
        self.records.push(record);
        Ok(())
    }

    #[must_use]
    pub fn records(&self) -> &[IrRecord] {
        &self.records
    }

    #[must_use]
    pub fn finish(self) -> Vec<IrRecord> {
        self.records
    }
}

/// Lower a program to IR with the given limits
/// # Errors
/// See [`IrBuilder::lower_program`]
pub fn lower(program: &Program, limits: &Limits) -> Result<Vec<IrRecord>, LowerError> {
    let mut builder = IrBuilder::new(limits.max_ir_records);
    builder.lower_program(program)?;
    Ok(builder.finish())
}
