//! Error types for distview-sampling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Core error: {0}")]
    Core(#[from] distview_core::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
