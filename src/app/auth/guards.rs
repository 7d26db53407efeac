use super::{client::AuthApi, state::AuthContext, storage::TokenStore, types::User};
use crate::app::routes::Route;

/// Outcome of loading a page that requires a signed-in user.
#[derive(Debug)]
pub enum Guarded<T> {
    Allowed(T),
    Redirect(Route),
}

/// The signed-in user, or the login page to send the visitor to.
///
/// Only a navigation aid; the upstream API enforces access itself.
///
/// # Errors
/// Returns `Route::Login` when nobody is signed in.
pub fn require_auth<A: AuthApi, S: TokenStore>(auth: &AuthContext<A, S>) -> Result<&User, Route> {
    auth.user().ok_or(Route::Login)
}
