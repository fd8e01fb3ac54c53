use thiserror::Error;

/// Code generation error types
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to write assembly: {0}")]
    Io(#[from] std::io::Error),
}
