pub mod health;
pub use self::health::health;

pub mod login;
pub use self::login::login;

pub mod register;
pub use self::register::register;

pub mod user;
pub use self::user::user;

// common functions for the handlers
use crate::strapi::{types::User, StrapiError};
use axum::{
    http::{
        header::{ALLOW, AUTHORIZATION},
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

/// Failure body of every proxy endpoint.
#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

/// Success body of the auth endpoints.
#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct UserBody {
    pub user: User,
}

pub(crate) fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

pub(crate) fn user_response(user: User) -> Response {
    (StatusCode::OK, Json(UserBody { user })).into_response()
}

/// Relay an upstream failure: API errors keep their status and message,
/// transport and decode errors become a generic 502.
pub(crate) fn upstream_failure(err: &StrapiError) -> Response {
    match err {
        StrapiError::Api { status, message: text } => {
            debug!("upstream rejected request: {} {}", status, text);

            message(*status, text.clone())
        }
        StrapiError::Transport(_) | StrapiError::Decode(_) | StrapiError::Url(_) => {
            error!("upstream request failed: {err}");

            message(err.status(), "Unable to reach the events service")
        }
    }
}

fn method_not_allowed(method: &Method, allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, HeaderValue::from_static(allow))],
        Json(MessageBody {
            message: format!("Method {method} not allowed"),
        }),
    )
        .into_response()
}

/// Fallback for endpoints that only accept `POST`.
pub async fn post_only(method: Method) -> Response {
    method_not_allowed(&method, "POST")
}

/// Fallback for endpoints that only accept `GET`.
pub async fn get_only(method: Method) -> Response {
    method_not_allowed(&method, "GET")
}

pub(crate) fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let trimmed = value.trim();
    let token = trimmed
        .strip_prefix("Bearer ")
        .or_else(|| trimmed.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
