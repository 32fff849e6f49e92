//! Seed client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from seed endpoint")]
    UnexpectedStatus { status: u16 },

    #[error("Failed to decode seed response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;
