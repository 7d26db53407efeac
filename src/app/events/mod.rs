//! Event pages: listing, detail, create, edit and the user's dashboard.

mod add;
mod client;
mod dashboard;
mod edit;
pub mod form;
mod list;

pub use add::AddEventPage;
pub use client::EventsApi;
pub use dashboard::DashboardPage;
pub use edit::EditEventPage;
pub use form::{EventField, EventForm, Phase};
pub use list::{EventPage, EventsPage};
