pub mod errors;
pub mod generator;

pub use errors::*;
pub use generator::*;
