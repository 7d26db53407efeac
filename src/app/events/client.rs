//! The event operations pages rely on. The upstream client implements them
//! directly; pages stay generic so they can run against a fake in tests.

use crate::{
    app::errors::AppError,
    strapi::{
        types::{Event, EventAttributes, EventFields, Page},
        StrapiClient, EVENTS_PER_PAGE,
    },
};
use std::future::Future;

pub trait EventsApi {
    fn find_event(&self, id: u64) -> impl Future<Output = Result<Event, AppError>> + Send;

    fn find_event_by_slug(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Event>, AppError>> + Send;

    /// One page of the public listing, `page` starting at 1.
    fn list_events(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<Page<EventAttributes>, AppError>> + Send;

    fn search_events(&self, term: &str) -> impl Future<Output = Result<Vec<Event>, AppError>> + Send;

    fn list_user_events(
        &self,
        user_id: u64,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Event>, AppError>> + Send;

    fn create_event(
        &self,
        fields: &EventFields,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Event, AppError>> + Send;

    fn update_event(
        &self,
        id: u64,
        fields: &EventFields,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Event, AppError>> + Send;
}

impl EventsApi for StrapiClient {
    async fn find_event(&self, id: u64) -> Result<Event, AppError> {
        Ok(Self::find_event(self, id).await?)
    }

    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError> {
        Ok(Self::find_event_by_slug(self, slug).await?)
    }

    async fn list_events(&self, page: u32) -> Result<Page<EventAttributes>, AppError> {
        Ok(Self::list_events(self, page, EVENTS_PER_PAGE).await?)
    }

    async fn search_events(&self, term: &str) -> Result<Vec<Event>, AppError> {
        Ok(Self::search_events(self, term).await?.data)
    }

    async fn list_user_events(
        &self,
        user_id: u64,
        token: Option<&str>,
    ) -> Result<Vec<Event>, AppError> {
        Ok(Self::list_user_events(self, user_id, token).await?.data)
    }

    async fn create_event(
        &self,
        fields: &EventFields,
        token: Option<&str>,
    ) -> Result<Event, AppError> {
        Ok(Self::create_event(self, fields, token).await?)
    }

    async fn update_event(
        &self,
        id: u64,
        fields: &EventFields,
        token: Option<&str>,
    ) -> Result<Event, AppError> {
        Ok(Self::update_event(self, id, fields, token).await?)
    }
}
