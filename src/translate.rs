//! Client for the third-party translation endpoint.
//!
//! A thin, blocking HTTP wrapper around the DeepL v2 translate API. Failures
//! surface as [`TranslationError`] without retry and are fully decoupled from
//! extraction errors.

use serde::Deserialize;

use crate::error::TranslationError;

/// Default endpoint (DeepL free tier).
pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// Authenticated translation client.
pub struct Translator {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(default)]
    detected_source_language: String,
    text: String,
}

impl Translator {
    /// Create a client against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Translate `text` into `target_lang` (e.g. `"ZH"`).
    ///
    /// Issues a form-encoded POST with a `DeepL-Auth-Key` authorization
    /// header and returns the first translation of the response.
    pub fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&[("text", text), ("target_lang", target_lang)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Status(status.as_u16()));
        }

        let body: TranslateResponse = response
            .json()
            .map_err(|err| TranslationError::MalformedResponse(err.to_string()))?;

        body.translations
            .into_iter()
            .next()
            .map(|translation| {
                log::debug!(
                    "translated from detected source language {}",
                    translation.detected_source_language
                );
                translation.text
            })
            .ok_or_else(|| TranslationError::MalformedResponse("empty translations array".into()))
    }
}
