use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Malformed pagination override: {0}")]
    DecodeMalformed(#[from] base64::DecodeError),

    #[error("Invalid pagination override record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Fragment {index} uses an IN-list marker without parameters: {text}")]
    MalformedFragmentRequest { index: usize, text: String },
}
