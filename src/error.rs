use thiserror::Error;

/// a single bad value typed by the user. the requested operation stops there,
/// nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid input for {field}: {input:?} is not a 32-bit hex value")]
    InvalidHex { field: String, input: String },
    #[error("invalid input for number of data blocks: {0:?}")]
    InvalidCount(String),
    #[error("too many data blocks: {count} (max {max})")]
    TooManyBlocks { count: usize, max: usize },
    #[error("invalid choice: {0}")]
    InvalidChoice(i64),
    #[error("invalid input for choice: {0:?}")]
    InvalidChoiceInput(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended while waiting for {prompt}")]
    UnexpectedEof { prompt: String },
}

pub type Result<T, E = SessionError> = std::result::Result<T, E>;
