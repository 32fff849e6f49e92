//! Seed client configuration

/// Default base URL of the demo todo collection.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Configuration for the HTTP seed fetcher.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    /// Base URL of the todo collection resource.
    pub base_url: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SeedConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}
