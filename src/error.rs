use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarnaError {
    #[error("Output error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("Usage error: {0}")]
    Usage(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, WarnaError>;
