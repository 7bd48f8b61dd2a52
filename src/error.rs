use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network unreachable, DNS failure, broken body stream.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    #[error("text extraction error: {0}")]
    TextExtract(String),

    /// The document's permission flags forbid text extraction.
    #[error("document does not permit text extraction")]
    ExtractionNotAllowed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::PdfParse(err.to_string())
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}
