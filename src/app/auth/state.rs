//! Session state for one client. The context is created once, handed to the
//! pages that need it, and mutated only through its own operations. The token
//! lives in the `TokenStore`; `user` and `error` live in memory.

use super::{
    client::AuthApi,
    storage::TokenStore,
    types::{LoginRequest, RegisterRequest, User},
};
use crate::app::{errors::AppError, routes::Route};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

pub struct AuthContext<A, S> {
    api: A,
    store: S,
    user: Option<User>,
    error: Option<String>,
}

impl<A: AuthApi, S: TokenStore> AuthContext<A, S> {
    pub const fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            user: None,
            error: None,
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Message of the last failed login or registration.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Bearer token of the signed-in user.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.token.as_str())
            .filter(|token| !token.is_empty())
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// # Errors
    /// Returns the upstream or transport error; `error()` then holds its message.
    #[instrument(skip_all, fields(identifier = %request.identifier))]
    pub async fn login(&mut self, request: LoginRequest) -> Result<Route, AppError> {
        let result = self.api.login(&request).await;
        self.establish(result)
    }

    /// # Errors
    /// Returns the upstream or transport error; `error()` then holds its message.
    #[instrument(skip_all, fields(username = %request.username))]
    pub async fn register(&mut self, request: RegisterRequest) -> Result<Route, AppError> {
        let result = self.api.register(&request).await;
        self.establish(result)
    }

    /// Forget the session. Purely local.
    pub fn logout(&mut self) -> Route {
        if let Err(err) = self.store.clear() {
            warn!("Failed to clear stored token: {err}");
        }
        self.user = None;
        self.error = None;
        Route::Home
    }

    /// Restore the user from a stored token.
    ///
    /// A missing token or one the server rejects (401/403) leaves the
    /// session signed out and returns `Ok`; a rejected token is also cleared.
    /// Transport failures keep the token for the next attempt.
    ///
    /// # Errors
    /// Returns the store error, or any upstream failure other than 401/403.
    #[instrument(skip_all)]
    pub async fn hydrate(&mut self) -> Result<(), AppError> {
        let Some(token) = self.store.load()? else {
            debug!("no stored token");
            return Ok(());
        };

        match self.api.fetch_user(token.expose_secret()).await {
            Ok(user) => {
                let user = if user.token.is_empty() {
                    user.with_token(token.expose_secret())
                } else {
                    user
                };
                debug!("session restored for user {}", user.id);
                self.user = Some(user);
                Ok(())
            }
            Err(err) => {
                self.user = None;
                if matches!(err.status(), Some(401 | 403)) {
                    debug!("stored token rejected, clearing it");
                    self.store.clear()?;
                    return Ok(());
                }
                Err(err)
            }
        }
    }

    fn establish(&mut self, result: Result<User, AppError>) -> Result<Route, AppError> {
        let saved = result.and_then(|user| {
            self.store
                .save(&SecretString::from(user.token.as_str()))
                .map(|()| user)
        });

        match saved {
            Ok(user) => {
                debug!("signed in as user {}", user.id);
                self.user = Some(user);
                self.error = None;
                Ok(Route::Dashboard)
            }
            Err(err) => {
                debug!("sign in failed: {err}");
                self.user = None;
                self.error = Some(err.message().to_string());
                Err(err)
            }
        }
    }
}
