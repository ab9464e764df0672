use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrossnoteError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Record with ID {0} not found")]
    NotFound(u64),

    #[error("Invalid sort specification '{0}'. Expected ask|desk@ID|Beg.Time|End.Time|Crossed|Priority|Text")]
    InvalidSortSpec(String),

    #[error("Date error in record {id}: {value:?} is not a dd:MM:yyyy date")]
    InvalidDate { id: u64, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrossnoteError>;
