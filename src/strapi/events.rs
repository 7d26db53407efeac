use super::{
    read,
    types::{Envelope, Event, EventAttributes, EventFields, Page},
    with_token, StrapiClient, StrapiError,
};
use tracing::{debug, instrument};

/// Page size of the public listing.
pub const EVENTS_PER_PAGE: u32 = 5;

const SEARCH_FIELDS: [&str; 4] = ["name", "performers", "description", "venue"];

impl StrapiClient {
    /// Fetch one event with its image relation populated.
    ///
    /// # Errors
    /// Returns `StrapiError::Api` (404) if the event does not exist.
    #[instrument(skip(self))]
    pub async fn find_event(&self, id: u64) -> Result<Event, StrapiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("/api/events/{id}")))
            .query(&[("populate", "image")])
            .send()
            .await?;

        let envelope: Envelope<Event> = read(response).await?;

        Ok(envelope.data)
    }

    /// Fetch one event by slug; `None` if no event carries it.
    ///
    /// # Errors
    /// Returns an error if the upstream request fails.
    #[instrument(skip(self))]
    pub async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>, StrapiError> {
        let response = self
            .http
            .get(self.endpoint("/api/events"))
            .query(&[("filters[slug][$eq]", slug), ("populate", "image")])
            .send()
            .await?;

        let page: Page<EventAttributes> = read(response).await?;

        Ok(page.data.into_iter().next())
    }

    /// List events by ascending date, one page at a time.
    ///
    /// # Errors
    /// Returns an error if the upstream request fails.
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<Page<EventAttributes>, StrapiError> {
        let page = page.max(1).to_string();
        let page_size = page_size.max(1).to_string();

        let response = self
            .http
            .get(self.endpoint("/api/events"))
            .query(&[
                ("sort", "date:asc"),
                ("populate", "image"),
                ("pagination[page]", page.as_str()),
                ("pagination[pageSize]", page_size.as_str()),
            ])
            .send()
            .await?;

        read(response).await
    }

    /// Case-insensitive search over name, performers, description and venue.
    ///
    /// # Errors
    /// Returns an error if the upstream request fails.
    #[instrument(skip(self))]
    pub async fn search_events(&self, term: &str) -> Result<Page<EventAttributes>, StrapiError> {
        let mut query: Vec<(String, String)> = SEARCH_FIELDS
            .iter()
            .enumerate()
            .map(|(index, field)| {
                (
                    format!("filters[$or][{index}][{field}][$containsi]"),
                    term.to_string(),
                )
            })
            .collect();
        query.push(("populate".to_string(), "image".to_string()));

        let response = self
            .http
            .get(self.endpoint("/api/events"))
            .query(&query)
            .send()
            .await?;

        let page: Page<EventAttributes> = read(response).await?;

        debug!("search matched {} events", page.data.len());

        Ok(page)
    }

    /// Events owned by `user_id`.
    ///
    /// # Errors
    /// Returns an error if the upstream request fails or the token is rejected.
    #[instrument(skip(self, token))]
    pub async fn list_user_events(
        &self,
        user_id: u64,
        token: Option<&str>,
    ) -> Result<Page<EventAttributes>, StrapiError> {
        let user_id = user_id.to_string();
        let request = self
            .http
            .get(self.endpoint("/api/events"))
            .query(&[
                ("filters[user][id][$eq]", user_id.as_str()),
                ("sort", "date:asc"),
                ("populate", "image"),
            ]);

        let response = with_token(request, token).send().await?;

        read(response).await
    }

    /// Create an event from form fields.
    ///
    /// # Errors
    /// Returns `StrapiError::Api` when the upstream rejects the payload.
    #[instrument(skip_all)]
    pub async fn create_event(
        &self,
        fields: &EventFields,
        token: Option<&str>,
    ) -> Result<Event, StrapiError> {
        let request = self
            .http
            .post(self.endpoint("/api/events"))
            .json(&Envelope { data: fields });

        let response = with_token(request, token).send().await?;

        saved(read(response).await?)
    }

    /// Replace the editable fields of event `id`.
    ///
    /// # Errors
    /// Returns `StrapiError::Api` when the upstream rejects the update.
    #[instrument(skip(self, fields, token))]
    pub async fn update_event(
        &self,
        id: u64,
        fields: &EventFields,
        token: Option<&str>,
    ) -> Result<Event, StrapiError> {
        let request = self
            .http
            .put(self.endpoint(&format!("/api/events/{id}")))
            .json(&Envelope { data: fields });

        let response = with_token(request, token).send().await?;

        saved(read(response).await?)
    }
}

/// Write responses are only used for the slug of the saved event.
fn saved(envelope: Envelope<Event>) -> Result<Event, StrapiError> {
    if envelope.data.attributes.slug.trim().is_empty() {
        return Err(StrapiError::Decode("saved event has no slug".to_string()));
    }
    Ok(envelope.data)
}
