// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ElogError>;
