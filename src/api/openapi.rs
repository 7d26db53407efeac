use super::handlers::{self, health::Health, MessageBody, UserBody};
use crate::strapi::types::{LoginRequest, RegisterRequest, User};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::login::login,
        handlers::register::register,
        handlers::user::user,
    ),
    components(schemas(Health, LoginRequest, RegisterRequest, User, UserBody, MessageBody)),
    tags(
        (name = "auth", description = "Login, registration and session rehydration proxied to the events API"),
        (name = "health", description = "Service and upstream health"),
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_proxy_endpoints() {
        let doc = openapi();
        for path in ["/health", "/api/login", "/api/register", "/api/user"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
