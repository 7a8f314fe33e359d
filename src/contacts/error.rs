use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid input '{0}'. Please enter a valid number.")]
    InvalidIndex(String),

    #[error("Invalid number {0}. Please choose a number from the list.")]
    IndexOutOfRange(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
