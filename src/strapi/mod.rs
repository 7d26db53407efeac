//! Typed client for the upstream Strapi API.
//!
//! Every call returns `Result<T, StrapiError>`: either the decoded payload or a
//! tagged failure carrying the upstream status and message. Callers never see
//! the raw error envelope.

mod auth;
mod events;
pub mod types;

pub use events::EVENTS_PER_PAGE;

use crate::APP_USER_AGENT;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use self::types::ErrorEnvelope;

#[derive(Debug, Error)]
pub enum StrapiError {
    #[error("invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    /// Non-2xx answer; status and message come from the upstream envelope.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("upstream unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected upstream response: {0}")]
    Decode(String),
}

impl StrapiError {
    /// Status to relay to the browser.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Api { status, .. } => *status,
            Self::Url(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Transport(_) | Self::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StrapiClient {
    base_url: Url,
    http: Client,
}

impl StrapiClient {
    /// Build a client for the given upstream base URL.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StrapiError> {
        let base_url = Url::parse(base_url.trim())?;

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url, http })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check that the upstream answers its health probe.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> bool {
        match self.http.get(self.endpoint("/_health")).send().await {
            Ok(response) => {
                debug!("upstream health: {}", response.status());
                response.status().is_success()
            }
            Err(err) => {
                debug!("upstream health failed: {err}");
                false
            }
        }
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim().trim_start_matches('/'))
    }
}

fn with_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token.filter(|token| !token.is_empty()) {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Decode a successful body or turn the upstream error envelope into
/// `StrapiError::Api`.
async fn read<T: DeserializeOwned>(response: Response) -> Result<T, StrapiError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        serde_json::from_slice(&body).map_err(|err| StrapiError::Decode(err.to_string()))
    } else {
        Err(api_error(status, &body))
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> StrapiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => StrapiError::Api {
            status: StatusCode::from_u16(envelope.error.status).unwrap_or(status),
            message: if envelope.error.message.is_empty() {
                fallback_message(status)
            } else {
                envelope.error.message
            },
        },
        Err(_) => StrapiError::Api {
            status,
            message: fallback_message(status),
        },
    }
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = StrapiClient::new("http://localhost:1337/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint("/api/events"),
            "http://localhost:1337/api/events"
        );
        assert_eq!(
            client.endpoint("api/auth/local"),
            "http://localhost:1337/api/auth/local"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = StrapiClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(StrapiError::Url(_))));
    }

    #[test]
    fn api_error_takes_status_and_message_from_envelope() {
        let body = br#"{"data":null,"error":{"status":400,"name":"ValidationError","message":"Invalid identifier or password"}}"#;
        let err = api_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid identifier or password");
    }

    #[test]
    fn api_error_without_envelope_uses_reason_phrase() {
        let err = api_error(StatusCode::SERVICE_UNAVAILABLE, b"<html>down</html>");
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Service Unavailable");
    }

    #[test]
    fn decode_errors_map_to_bad_gateway() {
        let err = StrapiError::Decode("missing field".to_string());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
