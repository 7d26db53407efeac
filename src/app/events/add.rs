use super::{
    client::EventsApi,
    form::{EventForm, Phase},
};
use crate::{
    app::{errors::AppError, routes::Route},
    strapi::types::EventFields,
};
use tracing::instrument;

/// Blank event form; saving creates a new event.
#[derive(Clone, Debug)]
pub struct AddEventPage {
    form: EventForm,
}

impl Default for AddEventPage {
    fn default() -> Self {
        Self::new()
    }
}

impl AddEventPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: EventForm::new(EventFields::default()),
        }
    }

    #[must_use]
    pub const fn form(&self) -> &EventForm {
        &self.form
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        self.form.phase()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.form.error()
    }

    /// # Errors
    /// Returns `AppError::Validation` for an unknown field name.
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> Result<(), AppError> {
        self.form.input(name, value)
    }

    /// # Errors
    /// Same contract as the edit page: validation first, then the upstream error.
    #[instrument(skip_all)]
    pub async fn submit<E: EventsApi>(
        &mut self,
        api: &E,
        token: Option<&str>,
    ) -> Result<Route, AppError> {
        self.form.begin_submit()?;
        let result = api.create_event(self.form.fields(), token).await;
        self.form.finish(result)
    }
}
