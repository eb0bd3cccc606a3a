use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhActivityError>;

#[derive(Error, Debug)]
pub enum GhActivityError {
    #[error("Malformed pagination header entry: {0}")]
    MalformedLinkHeader(String),
    #[error("Fetch failed on page {page}: HTTP status {status}")]
    FetchFailed { page: usize, status: u16 },
    #[error("Malformed item: {0}")]
    MalformedItem(String),
    #[error("Corrupt record store at line {line}: {reason}")]
    StoreCorrupt { line: usize, reason: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
