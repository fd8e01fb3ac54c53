pub mod errors;
pub mod instructions;
pub mod lowering;

pub use errors::*;
pub use instructions::*;
pub use lowering::*;
