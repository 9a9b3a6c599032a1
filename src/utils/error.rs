use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a currency amount: {input:?}")]
    MoneyParse { input: String },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
