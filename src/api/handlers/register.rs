use super::{message, upstream_failure, user_response, MessageBody, UserBody};
use crate::strapi::{types::RegisterRequest, StrapiClient};
use axum::{extract::Extension, http::StatusCode, response::Response, Json};
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses (
        (status = 200, description = "Registration successful", body = UserBody, content_type = "application/json"),
        (status = 400, description = "Missing payload, or email/username already taken", body = MessageBody),
        (status = 405, description = "Only POST is allowed", body = MessageBody),
        (status = 502, description = "Upstream unreachable", body = MessageBody),
    ),
    tag = "auth"
)]
// axum handler for register
#[instrument(skip_all)]
pub async fn register(
    strapi: Extension<StrapiClient>,
    payload: Option<Json<RegisterRequest>>,
) -> Response {
    let request: RegisterRequest = match payload {
        Some(Json(payload)) => payload,
        None => return message(StatusCode::BAD_REQUEST, "Missing payload"),
    };

    debug!("register: {:?}", request);

    match strapi.register(&request).await {
        Ok(user) => user_response(user),
        Err(err) => upstream_failure(&err),
    }
}
