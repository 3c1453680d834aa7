use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {message}")]
    OutputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Output,
}

impl HelloError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HelloError::Io(_) => ErrorCategory::Io,
            HelloError::OutputError { .. } => ErrorCategory::Output,
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloError>;
