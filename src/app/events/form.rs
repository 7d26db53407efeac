use crate::{
    app::{errors::AppError, routes::Route},
    strapi::types::{Event, EventFields},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::{fmt, str::FromStr};
use tracing::{debug, error};

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const SOMETHING_WENT_WRONG: &str = "Something Went Wrong";

/// Names of the editable event fields, as used by form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventField {
    Name,
    Performers,
    Venue,
    Address,
    Date,
    Time,
    Description,
}

impl EventField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Performers,
        Self::Venue,
        Self::Address,
        Self::Date,
        Self::Time,
        Self::Description,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Performers => "performers",
            Self::Venue => "venue",
            Self::Address => "address",
            Self::Date => "date",
            Self::Time => "time",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventField {
    type Err = AppError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| AppError::Validation(format!("Unknown field: {name}")))
    }
}

impl EventFields {
    #[must_use]
    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Name => &self.name,
            EventField::Performers => &self.performers,
            EventField::Venue => &self.venue,
            EventField::Address => &self.address,
            EventField::Date => &self.date,
            EventField::Time => &self.time,
            EventField::Description => &self.description,
        }
    }

    /// A copy with `field` replaced and every other field untouched.
    #[must_use]
    pub fn with(self, field: EventField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            EventField::Name => Self { name: value, ..self },
            EventField::Performers => Self {
                performers: value,
                ..self
            },
            EventField::Venue => Self {
                venue: value,
                ..self
            },
            EventField::Address => Self {
                address: value,
                ..self
            },
            EventField::Date => Self { date: value, ..self },
            EventField::Time => Self { time: value, ..self },
            EventField::Description => Self {
                description: value,
                ..self
            },
        }
    }

    /// Fields that are empty or whitespace only.
    #[must_use]
    pub fn empty_fields(&self) -> Vec<EventField> {
        EventField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }
}

/// Stored event dates may be plain dates or full timestamps; date inputs want
/// `YYYY-MM-DD`. Unparseable values are returned unchanged.
#[must_use]
pub fn date_input(date: &str) -> String {
    let date = date.trim();

    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.format("%Y-%m-%d").to_string();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
        return timestamp.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.date().format("%Y-%m-%d").to_string();
    }

    date.to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Done(Route),
}

/// Form state shared by the add and edit pages.
#[derive(Clone, Debug)]
pub struct EventForm {
    fields: EventFields,
    phase: Phase,
    error: Option<String>,
}

impl EventForm {
    #[must_use]
    pub const fn new(fields: EventFields) -> Self {
        Self {
            fields,
            phase: Phase::Editing,
            error: None,
        }
    }

    #[must_use]
    pub const fn fields(&self) -> &EventFields {
        &self.fields
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn date_input(&self) -> String {
        date_input(&self.fields.date)
    }

    /// # Errors
    /// Returns `AppError::Validation` for a name that is not an event field.
    pub fn input(&mut self, name: &str, value: impl Into<String>) -> Result<(), AppError> {
        let field: EventField = name.parse()?;
        self.fields = std::mem::take(&mut self.fields).with(field, value);
        Ok(())
    }

    /// Validate and enter `Submitting`.
    pub(crate) fn begin_submit(&mut self) -> Result<(), AppError> {
        let empty = self.fields.empty_fields();
        if !empty.is_empty() {
            debug!("blocked submit, empty fields: {empty:?}");
            self.error = Some(FILL_ALL_FIELDS.to_string());
            self.phase = Phase::Editing;
            return Err(AppError::Validation(FILL_ALL_FIELDS.to_string()));
        }

        self.error = None;
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// Leave `Submitting`: navigate to the saved event or go back to editing.
    pub(crate) fn finish(&mut self, result: Result<Event, AppError>) -> Result<Route, AppError> {
        let result = result.and_then(|event| {
            if event.attributes.slug.trim().is_empty() {
                Err(AppError::Parse("saved event has no slug".to_string()))
            } else {
                Ok(event)
            }
        });

        match result {
            Ok(event) => {
                let route = Route::event(event.attributes.slug);
                self.phase = Phase::Done(route.clone());
                Ok(route)
            }
            Err(err) => {
                error!("event save failed: {err}");
                self.error = Some(SOMETHING_WENT_WRONG.to_string());
                self.phase = Phase::Editing;
                Err(err)
            }
        }
    }
}
