use serde::Deserialize;

pub use crate::strapi::types::{LoginRequest, RegisterRequest, User};

/// Success body of the proxy auth endpoints.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub user: User,
}
