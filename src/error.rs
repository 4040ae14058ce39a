use std::fmt;

/// Error types for loading Touchstone files
#[derive(Debug)]
pub enum TouchstoneError {
    InvalidExtension(String),
    Io(String),
}

impl fmt::Display for TouchstoneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TouchstoneError::InvalidExtension(msg) => {
                write!(f, "Invalid Touchstone extension (expected .sNp): {}", msg)
            }
            TouchstoneError::Io(msg) => write!(f, "File error: {}", msg),
        }
    }
}

impl std::error::Error for TouchstoneError {}

impl From<std::io::Error> for TouchstoneError {
    fn from(err: std::io::Error) -> Self {
        TouchstoneError::Io(err.to_string())
    }
}
