//! Resolve a bearer token into the current user, used by the client to
//! rehydrate its session on start.

use super::{extract_bearer_token, message, upstream_failure, user_response, MessageBody, UserBody};
use crate::strapi::StrapiClient;
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::Response,
};
use tracing::{debug, instrument};

#[utoipa::path(
    get,
    path = "/api/user",
    responses (
        (status = 200, description = "Token is valid", body = UserBody, content_type = "application/json"),
        (status = 401, description = "Token rejected upstream", body = MessageBody),
        (status = 403, description = "No bearer token", body = MessageBody),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn user(strapi: Extension<StrapiClient>, headers: HeaderMap) -> Response {
    let Some(token) = extract_bearer_token(&headers) else {
        debug!("no bearer token");
        return message(StatusCode::FORBIDDEN, "User forbidden");
    };

    match strapi.me(&token).await {
        Ok(user) => user_response(user),
        Err(err) => upstream_failure(&err),
    }
}
