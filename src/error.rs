use thiserror::Error;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Extraction was attempted on an empty priority queue. Internal
    /// invariant violation, a well-formed caller never sees this.
    #[error("extract_min() called on an empty heap")]
    EmptyQueue,

    #[error("cannot compress an empty input stream")]
    EmptyInput,

    #[error("symbol {0:?} has no entry in the code table")]
    UnknownSymbol(char),

    #[error("malformed artifact: {0}")]
    MalformedArtifact(String),

    #[error("corrupt data: {0}")]
    CorruptData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
