//! JSON helpers shared by the client-side API wrappers. Every request gets the
//! same timeout and user agent, and every non-2xx answer becomes an
//! `AppError::Http` carrying the server's `message` when there is one.

use super::errors::AppError;
use crate::APP_USER_AGENT;
use reqwest::{header::AUTHORIZATION, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Timeout applied to every client request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl ApiClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts a JSON body and parses a JSON response.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, non-2xx status or bad JSON.
    #[instrument(skip(self, body), fields(base_url = %self.base_url))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = build_url_with_base(&self.base_url, path);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }

    /// Fetches JSON with an `Authorization: Bearer` header.
    ///
    /// # Errors
    /// Returns an `AppError` on transport failure, non-2xx status or bad JSON.
    #[instrument(skip(self, token), fields(base_url = %self.base_url))]
    pub async fn get_json_with_bearer<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")));
    }

    let body = response.text().await.unwrap_or_default();
    debug!("request failed with {status}");

    let message = serde_json::from_str::<MessageBody>(&body)
        .map(|body| body.message)
        .unwrap_or(body);

    Err(AppError::Http {
        status: status.as_u16(),
        message: sanitize_body(&message),
    })
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        ok: bool,
    }

    fn can_bind_localhost() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[test]
    fn build_url_with_base_joins_cleanly() {
        assert_eq!(
            build_url_with_base("http://localhost:8080/", "/api/login"),
            "http://localhost:8080/api/login"
        );
        assert_eq!(build_url_with_base("", "/api/login"), "/api/login");
        assert_eq!(
            build_url_with_base(" http://proxy ", "api/user"),
            "http://proxy/api/user"
        );
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body(" nope "), "nope");
        assert_eq!(sanitize_body(&"x".repeat(500)).len(), MAX_ERROR_CHARS);
    }

    #[tokio::test]
    async fn error_body_message_is_surfaced() -> Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "message": "Invalid identifier or password" })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri())?;
        let result: Result<Echo, AppError> = client.post_json("/api/login", &json!({})).await;

        assert_eq!(
            result,
            Err(AppError::Http {
                status: 400,
                message: "Invalid identifier or password".to_string()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn bearer_header_is_sent() -> Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user"))
            .and(header("authorization", "Bearer t0k3n"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri())?;
        let echo: Echo = client.get_json_with_bearer("/api/user", "t0k3n").await?;

        assert_eq!(echo, Echo { ok: true });
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() -> Result<()> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0");
        let Ok(listener) = listener else {
            return Ok(());
        };
        let addr = listener.local_addr()?;
        drop(listener);

        let client = ApiClient::new(&format!("http://{addr}"))?;
        let result: Result<Echo, AppError> = client.get_json_with_bearer("/api/user", "t").await;

        assert!(matches!(result, Err(AppError::Network(_))));
        Ok(())
    }
}
