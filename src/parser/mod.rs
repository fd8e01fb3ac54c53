pub mod ast;
pub mod builder;
pub mod cursor;
pub mod errors;
pub mod recognizer;

pub use ast::*;
pub use builder::*;
pub use cursor::*;
pub use errors::*;
pub use recognizer::*;
