use thiserror::Error;

#[derive(Error, Debug)]
pub enum YahoozyError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("History Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("History Format Error: {0}")]
    History(String),
}

pub type YhResult<T> = Result<T, YahoozyError>;
