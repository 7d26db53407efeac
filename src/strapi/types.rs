//! Wire types for the Strapi v4 content API. Entries arrive wrapped as
//! `{ data: { id, attributes } }`; failures as `{ error: { status, message } }`.
//! Credential payloads redact passwords and tokens from `Debug`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The authenticated identity handed to the browser.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    /// Upstream JWT. `/api/users/me` does not return it, so callers fill it in.
    #[serde(default)]
    pub token: String,
}

impl User {
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("token", &"***")
            .finish()
    }
}

/// Upstream answer to `/api/auth/local` and `/api/auth/local/register`.
#[derive(Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
    pub user: User,
}

impl AuthResponse {
    #[must_use]
    pub fn into_user(self) -> User {
        self.user.with_token(self.jwt)
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address or username.
    pub identifier: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("identifier", &self.identifier)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

/// `{ data: T }`, used both for single entries and for write payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T> {
    /// Write responses may carry only the attributes.
    #[serde(default)]
    pub id: u64,
    pub attributes: T,
}

/// A collection response with its pagination metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    pub data: Vec<Entry<T>>,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Meta {
    pub pagination: Option<Pagination>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

/// The editable part of an event, which is also the `data` body of create and
/// update requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventFields {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub performers: String,
    #[serde(default, deserialize_with = "nullable")]
    pub venue: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EventAttributes {
    #[serde(flatten)]
    pub fields: EventFields,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default)]
    pub image: ImageRelation,
}

pub type Event = Entry<EventAttributes>;

impl Event {
    /// Thumbnail URL of the attached image, falling back to the original upload.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        let image = self.attributes.image.data.as_ref()?;
        let thumbnail = image
            .attributes
            .formats
            .as_ref()
            .and_then(|formats| formats.thumbnail.as_ref())
            .map(|format| format.url.as_str());

        thumbnail.or_else(|| Some(image.attributes.url.as_str()).filter(|url| !url.is_empty()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImageRelation {
    pub data: Option<Entry<ImageAttributes>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImageAttributes {
    #[serde(default)]
    pub url: String,
    pub formats: Option<ImageFormats>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImageFormats {
    pub thumbnail: Option<ImageFormat>,
    pub small: Option<ImageFormat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageFormat {
    pub url: String,
}

fn nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
