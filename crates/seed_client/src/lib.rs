//! # Seed Client
//!
//! Read-only client for the remote demo collection that seeds a first-run
//! todo list. One page is fetched per request; nothing is ever written
//! back to the origin.

pub mod config;
pub mod error;
pub mod fetcher;

// Re-exports
pub use config::SeedConfig;
pub use error::{Result, SeedError};
pub use fetcher::{HttpSeedFetcher, SeedFetcher};
