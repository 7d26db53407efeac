use super::client::EventsApi;
use crate::{
    app::{errors::AppError, routes::Route},
    strapi::types::Event,
};
use tracing::instrument;

/// One page of the public listing, soonest first.
#[derive(Clone, Debug)]
pub struct EventsPage {
    events: Vec<Event>,
    page: u32,
    page_count: u32,
}

impl EventsPage {
    /// # Errors
    /// Returns the upstream error.
    #[instrument(skip(api))]
    pub async fn load<E: EventsApi>(api: &E, page: u32) -> Result<Self, AppError> {
        let page = page.max(1);
        let listing = api.list_events(page).await?;
        let page_count = listing
            .meta
            .pagination
            .map_or(1, |pagination| pagination.page_count.max(1));

        Ok(Self {
            events: listing.data,
            page,
            page_count,
        })
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_count(&self) -> u32 {
        self.page_count
    }

    #[must_use]
    pub fn previous(&self) -> Option<Route> {
        if self.page > 1 {
            Some(Route::Events {
                page: Some(self.page - 1),
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn next(&self) -> Option<Route> {
        if self.page < self.page_count {
            Some(Route::Events {
                page: Some(self.page + 1),
            })
        } else {
            None
        }
    }
}

/// A single event, addressed by slug.
#[derive(Clone, Debug)]
pub struct EventPage {
    event: Event,
}

impl EventPage {
    /// # Errors
    /// Returns `AppError::Http` with status 404 when no event has `slug`.
    #[instrument(skip(api))]
    pub async fn load<E: EventsApi>(api: &E, slug: &str) -> Result<Self, AppError> {
        let event = api
            .find_event_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::Http {
                status: 404,
                message: format!("No event found for {slug}"),
            })?;
        Ok(Self { event })
    }

    #[must_use]
    pub const fn event(&self) -> &Event {
        &self.event
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.event.thumbnail_url()
    }

    #[must_use]
    pub fn edit_route(&self) -> Route {
        Route::EditEvent { id: self.event.id }
    }
}
