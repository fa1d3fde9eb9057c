use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed input: {message}")]
    FormatError { message: String },

    #[error("Required column missing: {column}")]
    SchemaError { column: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;
