use super::{message, upstream_failure, user_response, MessageBody, UserBody};
use crate::strapi::{types::LoginRequest, StrapiClient};
use axum::{extract::Extension, http::StatusCode, response::Response, Json};
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = UserBody, content_type = "application/json"),
        (status = 400, description = "Missing payload or rejected credentials", body = MessageBody),
        (status = 405, description = "Only POST is allowed", body = MessageBody),
        (status = 502, description = "Upstream unreachable", body = MessageBody),
    ),
    tag = "auth"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    strapi: Extension<StrapiClient>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    let request: LoginRequest = match payload {
        Some(Json(payload)) => payload,
        None => return message(StatusCode::BAD_REQUEST, "Missing payload"),
    };

    debug!("login: {:?}", request);

    match strapi.login(&request).await {
        Ok(user) => {
            debug!("Login successful");

            user_response(user)
        }
        Err(err) => upstream_failure(&err),
    }
}
