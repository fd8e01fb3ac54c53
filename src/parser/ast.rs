use crate::lexer::Position;
use std::fmt;

/// Node kinds, in the order used for their ordinals in tree dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Declaration,
    Type,
    Variable,
}

impl NodeKind {
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            NodeKind::Program => 0,
            NodeKind::Declaration => 1,
            NodeKind::Type => 2,
            NodeKind::Variable => 3,
        }
    }
}

/// Type keyword of a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub lexeme: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub pos: Position,
}

/// `Type Variable ;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub ty: TypeName,
    pub variable: Variable,
}

/// Complete program AST
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

/// Right-hand side of an assignment.
///
/// The declaration grammar never produces one; lowering accepts them so
/// initializers can be added later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Variable(Variable),
    Type(TypeName),
    Integer { value: String, pos: Position },
}

impl Expression {
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Expression::Variable(var) => &var.name,
            Expression::Type(ty) => &ty.lexeme,
            Expression::Integer { value, .. } => value,
        }
    }
}

/// `variable = expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: Variable,
    pub value: Expression,
}

/// Uniform borrowed view over the tree, used for dumps and lowering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstNode<'a> {
    Program(&'a Program),
    Declaration(&'a Declaration),
    Type(&'a TypeName),
    Variable(&'a Variable),
}

impl<'a> AstNode<'a> {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            AstNode::Program(_) => NodeKind::Program,
            AstNode::Declaration(_) => NodeKind::Declaration,
            AstNode::Type(_) => NodeKind::Type,
            AstNode::Variable(_) => NodeKind::Variable,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'a str {
        match *self {
            AstNode::Program(_) => "Program",
            AstNode::Declaration(_) => "Declaration",
            AstNode::Type(ty) => &ty.lexeme,
            AstNode::Variable(var) => &var.name,
        }
    }

    #[must_use]
    pub fn children(&self) -> Vec<AstNode<'a>> {
        match *self {
            AstNode::Program(program) => program
                .declarations
                .iter()
                .map(AstNode::Declaration)
                .collect(),
            AstNode::Declaration(decl) => {
                vec![AstNode::Type(&decl.ty), AstNode::Variable(&decl.variable)]
            }
            AstNode::Type(_) | AstNode::Variable(_) => Vec::new(),
        }
    }

    fn write_tree(&self, f: &mut fmt::Formatter, level: usize) -> fmt::Result {
        writeln!(
            f,
            "{}{} ({})",
            "  ".repeat(level),
            self.label(),
            self.kind().ordinal()
        )?;
        for child in self.children() {
            child.write_tree(f, level + 1)?;
        }
        Ok(())
    }
}

impl Program {
    #[must_use]
    pub fn as_node(&self) -> AstNode<'_> {
        AstNode::Program(self)
    }
}

/// Indented tree dump, one node per line as `label (ordinal)`
impl fmt::Display for AstNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.as_node(), f)
    }
}
