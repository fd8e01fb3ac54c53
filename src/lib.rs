//! declc
//!
//! A miniature compiler for a C-like declaration language: a lexer, a
//! recursive-descent parser that builds an AST, lowering to three-address
//! code, and a pseudo-assembly emitter.

pub mod codegen;
pub mod config;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod symbol;

pub use codegen::*;
pub use config::*;
pub use ir::*;
pub use lexer::*;
pub use parser::*;
pub use pipeline::*;
pub use symbol::*;
