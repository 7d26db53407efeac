//! Header search box and the results page it leads to.

use super::{errors::AppError, events::EventsApi, routes::Route};
use crate::strapi::types::Event;
use tracing::instrument;

#[derive(Clone, Debug, Default)]
pub struct SearchBox {
    term: String,
}

impl SearchBox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn input(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Route to the results for the current term; the box is emptied.
    pub fn submit(&mut self) -> Route {
        Route::Search {
            term: std::mem::take(&mut self.term),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchResultsPage {
    term: String,
    events: Vec<Event>,
}

impl SearchResultsPage {
    /// # Errors
    /// Returns the upstream error.
    #[instrument(skip(api))]
    pub async fn load<E: EventsApi>(api: &E, term: &str) -> Result<Self, AppError> {
        let events = api.search_events(term).await?;
        Ok(Self {
            term: term.to_string(),
            events,
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
