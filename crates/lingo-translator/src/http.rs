use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{TranslateError, TranslateRequest, Translator};

/// Success body of the translation endpoint
#[derive(Debug, Deserialize)]
struct TranslationBody {
    translation: String,
}

/// Failure bodies optionally carry a user-facing message
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// `reqwest`-backed client for the translation endpoint.
#[derive(Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslator {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "translation endpoint returned failure");

            // Prefer the server's own message when the body carries one
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);

            return Err(match message {
                Some(message) => TranslateError::Server(message),
                None => TranslateError::Status(status.as_u16()),
            });
        }

        let body: TranslationBody = response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        Ok(body.translation)
    }
}
