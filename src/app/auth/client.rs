//! Auth calls against the proxy. Passwords and tokens are never logged.

use super::types::{LoginRequest, RegisterRequest, SessionResponse, User};
use crate::app::{api::ApiClient, config::AppConfig, errors::AppError};
use std::future::Future;

/// The auth operations the session needs.
pub trait AuthApi {
    fn login(&self, request: &LoginRequest)
        -> impl Future<Output = Result<User, AppError>> + Send;

    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<User, AppError>> + Send;

    /// Resolve the user owning `token`.
    fn fetch_user(&self, token: &str) -> impl Future<Output = Result<User, AppError>> + Send;
}

/// `AuthApi` over HTTP against the proxy endpoints.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    api: ApiClient,
}

impl ProxyClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(proxy_base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            api: ApiClient::new(proxy_base_url)?,
        })
    }

    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::new(&config.proxy_base_url)
    }
}

impl AuthApi for ProxyClient {
    async fn login(&self, request: &LoginRequest) -> Result<User, AppError> {
        let body: SessionResponse = self.api.post_json("/api/login", request).await?;
        Ok(body.user)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, AppError> {
        let body: SessionResponse = self.api.post_json("/api/register", request).await?;
        Ok(body.user)
    }

    async fn fetch_user(&self, token: &str) -> Result<User, AppError> {
        let body: SessionResponse = self.api.get_json_with_bearer("/api/user", token).await?;
        Ok(body.user)
    }
}
