use lingo_types::TermDefinition;

pub mod client;
pub mod schema;

pub use client::GeminiClient;

/// Definition provider interface
#[async_trait::async_trait]
pub trait Definer: Send + Sync {
    /// Produce a structured definition for a bare term
    async fn define(&self, term: &str) -> Result<TermDefinition, DefineError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DefineError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed definition payload: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Authentication error")]
    AuthenticationError,
}
