//! Client core of the events application.
//!
//! Pages are plain state objects. Loading a page fetches what it shows;
//! submitting returns the [`Route`] to navigate to, or an [`AppError`] whose
//! message the page also keeps for display.

pub mod account;
pub mod api;
pub mod auth;
pub mod config;
mod errors;
pub mod events;
pub mod nav;
mod routes;
pub mod search;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AppConfig;
pub use errors::AppError;
pub use routes::Route;
