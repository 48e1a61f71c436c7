use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpTranslator;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate the request text, returning the translated text
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslateError>;
}

/// Wire request body. `source_lang` omitted means "let the service
/// detect the input language".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: LanguageCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<LanguageCode>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Server-provided error text from a failure body
    #[error("{0}")]
    Server(String),

    /// Non-2xx response without a usable error body
    #[error("request failed with status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
