pub mod errors;
pub mod scanner;
pub mod stream;
pub mod tokens;

pub use errors::*;
pub use scanner::*;
pub use stream::*;
pub use tokens::*;
