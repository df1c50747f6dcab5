use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreeterError {
    #[error("Input ended before a name was entered!")]
    UnexpectedEof,
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
