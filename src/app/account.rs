//! Login and registration pages. Both validate locally before handing the
//! credentials to the `AuthContext`, which owns the network call.

use super::{
    auth::{AuthApi, AuthContext, TokenStore},
    errors::AppError,
    events::form::FILL_ALL_FIELDS,
    routes::Route,
};
use crate::strapi::types::{LoginRequest, RegisterRequest};
use regex::Regex;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match!";

fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[derive(Clone, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl LoginPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// # Errors
    /// Returns `AppError::Validation` when a field is empty, otherwise the
    /// sign-in error reported by the auth context.
    pub async fn submit<A: AuthApi, S: TokenStore>(
        &mut self,
        auth: &mut AuthContext<A, S>,
    ) -> Result<Route, AppError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(self.reject(FILL_ALL_FIELDS));
        }

        let request = LoginRequest {
            identifier: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        let result = auth.login(request).await;
        self.error = auth.error().map(ToString::to_string);
        result
    }

    fn reject(&mut self, message: &str) -> AppError {
        self.error = Some(message.to_string());
        AppError::Validation(message.to_string())
    }
}

#[derive(Clone, Default)]
pub struct RegisterPage {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    error: Option<String>,
}

impl RegisterPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Every check runs before any request is made.
    fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.password_confirm.is_empty()
        {
            return Err(FILL_ALL_FIELDS);
        }
        if !valid_email(self.email.trim()) {
            return Err(INVALID_EMAIL);
        }
        if self.password != self.password_confirm {
            return Err(PASSWORDS_DO_NOT_MATCH);
        }
        Ok(())
    }

    /// # Errors
    /// Returns `AppError::Validation` for local failures, otherwise the
    /// registration error reported by the auth context.
    pub async fn submit<A: AuthApi, S: TokenStore>(
        &mut self,
        auth: &mut AuthContext<A, S>,
    ) -> Result<Route, AppError> {
        if let Err(message) = self.validate() {
            self.error = Some(message.to_string());
            return Err(AppError::Validation(message.to_string()));
        }

        let request = RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };

        let result = auth.register(request).await;
        self.error = auth.error().map(ToString::to_string);
        result
    }
}
