use super::client::EventsApi;
use crate::{
    app::{
        auth::{require_auth, AuthApi, AuthContext, Guarded, TokenStore},
        errors::AppError,
        routes::Route,
    },
    strapi::types::{Event, User},
};
use tracing::instrument;

/// The signed-in user's own events.
#[derive(Clone, Debug)]
pub struct DashboardPage {
    user: User,
    events: Vec<Event>,
}

impl DashboardPage {
    /// Anonymous visitors are redirected to the login page without any request.
    ///
    /// # Errors
    /// Returns the upstream error.
    #[instrument(skip_all)]
    pub async fn load<A, S, E>(
        auth: &AuthContext<A, S>,
        api: &E,
    ) -> Result<Guarded<Self>, AppError>
    where
        A: AuthApi,
        S: TokenStore,
        E: EventsApi,
    {
        let user = match require_auth(auth) {
            Ok(user) => user.clone(),
            Err(route) => return Ok(Guarded::Redirect(route)),
        };

        let events = api.list_user_events(user.id, auth.token()).await?;

        Ok(Guarded::Allowed(Self { user, events }))
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn edit_routes(&self) -> Vec<Route> {
        self.events
            .iter()
            .map(|event| Route::EditEvent { id: event.id })
            .collect()
    }
}
