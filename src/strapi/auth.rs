use super::{
    read,
    types::{AuthResponse, LoginRequest, RegisterRequest, User},
    StrapiClient, StrapiError,
};
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

impl StrapiClient {
    /// Authenticate with the local provider and return the user carrying its JWT.
    ///
    /// # Errors
    /// Returns `StrapiError::Api` with the upstream status and message when the
    /// credentials are rejected.
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn login(&self, request: &LoginRequest) -> Result<User, StrapiError> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/local"))
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let auth: AuthResponse = read(response).await?;

        debug!("login accepted for user {}", auth.user.id);

        Ok(auth.into_user())
    }

    /// Create an account with the local provider.
    ///
    /// # Errors
    /// Returns `StrapiError::Api` when the upstream refuses the registration,
    /// e.g. when the email or username is taken.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, StrapiError> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/local/register"))
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let auth: AuthResponse = read(response).await?;

        debug!("registration accepted for user {}", auth.user.id);

        Ok(auth.into_user())
    }

    /// Resolve a JWT into its user.
    ///
    /// # Errors
    /// Returns `StrapiError::Api` when the token is expired or invalid.
    #[instrument(skip_all)]
    pub async fn me(&self, token: &str) -> Result<User, StrapiError> {
        let response = self
            .http
            .get(self.endpoint("/api/users/me"))
            .header(ACCEPT, "application/json")
            .bearer_auth(token)
            .send()
            .await?;

        let user: User = read(response).await?;

        Ok(user.with_token(token))
    }
}
