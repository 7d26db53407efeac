//! # DJ Events
//!
//! `djevents` is an event listing application backed by a Strapi content API.
//! It ships two halves:
//!
//! - **Proxy server** (`api`): an axum service that forwards authentication
//!   requests (`/api/login`, `/api/register`, `/api/user`) to the upstream API
//!   and reshapes the answers into a small `{ user }` / `{ message }` contract.
//! - **Client core** (`app`): the session-scoped [`app::auth::AuthContext`],
//!   the create/edit event form pages, search and navigation. Pages are plain
//!   state objects; every submit returns the [`app::Route`] to navigate to or
//!   an [`app::AppError`] to show.
//!
//! ## Upstream
//!
//! The upstream API is the only durable store. Nothing here persists events or
//! users; the client keeps the auth token in a [`app::auth::TokenStore`] and
//! rehydrates the user from it on start.

pub mod api;
pub mod app;
pub mod cli;
pub mod strapi;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(GIT_COMMIT_HASH.len() >= 7);
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
