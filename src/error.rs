//! Error types for folio operations.
//!
//! Widget operations never fail; these cover loading documents, parsing
//! selectors and host-side input such as CLI actions and config files.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[cfg(feature = "cli")]
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
