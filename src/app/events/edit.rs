//! Edit page for an existing event.
//!
//! `Editing → Submitting → Done(route)`, or back to `Editing` with an error.
//! Incomplete forms never reach the network.

use super::{
    client::EventsApi,
    form::{EventForm, Phase},
};
use crate::{
    app::{errors::AppError, routes::Route},
    strapi::types::{Event, EventFields},
};
use tracing::instrument;

#[derive(Clone, Debug)]
pub struct EditEventPage {
    id: u64,
    form: EventForm,
    image_preview: Option<String>,
}

impl EditEventPage {
    /// Fetch the event and seed the form with its current values.
    ///
    /// # Errors
    /// Returns the upstream error, e.g. a 404 for an unknown id.
    #[instrument(skip(api))]
    pub async fn load<E: EventsApi>(api: &E, id: u64) -> Result<Self, AppError> {
        let event = api.find_event(id).await?;
        Ok(Self::from_event(&event))
    }

    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            id: event.id,
            form: EventForm::new(event.attributes.fields.clone()),
            image_preview: event.thumbnail_url().map(ToString::to_string),
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub const fn form(&self) -> &EventForm {
        &self.form
    }

    #[must_use]
    pub const fn fields(&self) -> &EventFields {
        self.form.fields()
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        self.form.phase()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.form.error()
    }

    /// Thumbnail of the current image, if the event has one.
    #[must_use]
    pub fn image_preview(&self) -> Option<&str> {
        self.image_preview.as_deref()
    }

    #[must_use]
    pub fn date_input(&self) -> String {
        self.form.date_input()
    }

    /// # Errors
    /// Returns `AppError::Validation` for an unknown field name.
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> Result<(), AppError> {
        self.form.input(name, value)
    }

    /// Save the form and return the event page to navigate to.
    ///
    /// # Errors
    /// Returns `AppError::Validation` when a field is empty (no request is
    /// made), otherwise the upstream error; the page then shows a generic
    /// failure message.
    #[instrument(skip(self, api, token), fields(id = self.id))]
    pub async fn submit<E: EventsApi>(
        &mut self,
        api: &E,
        token: Option<&str>,
    ) -> Result<Route, AppError> {
        self.form.begin_submit()?;
        let result = api.update_event(self.id, self.form.fields(), token).await;
        self.form.finish(result)
    }
}
