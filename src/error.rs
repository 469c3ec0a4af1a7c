use thiserror::Error;

#[derive(Error, Debug)]
pub enum EkhoError {
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Color error: {0}")]
    Color(#[from] ekho::ColorError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, EkhoError>;
