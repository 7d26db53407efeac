//! In-memory fakes for page tests.

use super::{auth::AuthApi, errors::AppError, events::EventsApi};
use crate::strapi::types::{
    Entry, Event, EventAttributes, EventFields, LoginRequest, Meta, Page, Pagination,
    RegisterRequest, User,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

/// Scripted `AuthApi` counting every call.
#[derive(Clone, Default)]
pub struct FakeAuth {
    calls: Arc<AtomicUsize>,
    failure: Option<AppError>,
}

impl FakeAuth {
    pub fn failing(err: AppError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, username: &str) -> Result<User, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(User {
                id: 7,
                username: username.to_string(),
                email: format!("{username}@djevents.dev"),
                token: "jwt-7".to_string(),
            }),
        }
    }
}

impl AuthApi for FakeAuth {
    async fn login(&self, request: &LoginRequest) -> Result<User, AppError> {
        self.answer(&request.identifier)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, AppError> {
        self.answer(&request.username)
    }

    async fn fetch_user(&self, _token: &str) -> Result<User, AppError> {
        self.answer("dj").map(|user| user.with_token(""))
    }
}

pub fn event(id: u64, slug: &str) -> Event {
    Entry {
        id,
        attributes: EventAttributes {
            fields: EventFields {
                name: "Jazz Night".to_string(),
                performers: "The Cats".to_string(),
                venue: "Blue Room".to_string(),
                address: "1 Main St".to_string(),
                date: "2026-11-20".to_string(),
                time: "8 PM".to_string(),
                description: "Smooth saxophone all night".to_string(),
            },
            slug: slug.to_string(),
            image: Default::default(),
        },
    }
}

fn not_found() -> AppError {
    AppError::Http {
        status: 404,
        message: "Not Found".to_string(),
    }
}

/// `EventsApi` over a fixed list of events. Writes are recorded.
#[derive(Clone, Default)]
pub struct FakeEvents {
    events: Arc<Mutex<Vec<Event>>>,
    write_failure: Option<AppError>,
    updates: Arc<Mutex<Vec<(u64, String)>>>,
    creates: Arc<AtomicUsize>,
    reads: Arc<AtomicUsize>,
}

impl FakeEvents {
    pub fn with_event(event: Event) -> Self {
        Self::with_events(vec![event])
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(Mutex::new(events)),
            ..Self::default()
        }
    }

    pub fn failing_writes(mut self, err: AppError) -> Self {
        self.write_failure = Some(err);
        self
    }

    /// `(id, venue)` of every update that reached the API.
    pub fn updates(&self) -> Vec<(u64, String)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn snapshot(&self) -> Vec<Event> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().clone()
    }
}

impl EventsApi for FakeEvents {
    async fn find_event(&self, id: u64) -> Result<Event, AppError> {
        self.snapshot()
            .into_iter()
            .find(|event| event.id == id)
            .ok_or_else(not_found)
    }

    async fn find_event_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|event| event.attributes.slug == slug))
    }

    async fn list_events(&self, page: u32) -> Result<Page<EventAttributes>, AppError> {
        let events = self.snapshot();
        let page_size = crate::strapi::EVENTS_PER_PAGE;
        let total = u32::try_from(events.len()).unwrap();
        let page = page.max(1);
        let data = events
            .into_iter()
            .skip(((page - 1) * page_size) as usize)
            .take(page_size as usize)
            .collect();

        Ok(Page {
            data,
            meta: Meta {
                pagination: Some(Pagination {
                    page,
                    page_size,
                    page_count: total.div_ceil(page_size),
                    total,
                }),
            },
        })
    }

    async fn search_events(&self, term: &str) -> Result<Vec<Event>, AppError> {
        let term = term.to_lowercase();
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|event| {
                let fields = &event.attributes.fields;
                [
                    &fields.name,
                    &fields.performers,
                    &fields.description,
                    &fields.venue,
                ]
                .iter()
                .any(|value| value.to_lowercase().contains(&term))
            })
            .collect())
    }

    async fn list_user_events(
        &self,
        _user_id: u64,
        token: Option<&str>,
    ) -> Result<Vec<Event>, AppError> {
        if token.is_none() {
            return Err(AppError::Http {
                status: 403,
                message: "Forbidden".to_string(),
            });
        }
        Ok(self.snapshot())
    }

    async fn create_event(
        &self,
        fields: &EventFields,
        _token: Option<&str>,
    ) -> Result<Event, AppError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.write_failure {
            return Err(err.clone());
        }

        let slug = fields.name.to_lowercase().replace(' ', "-");
        let mut created = event(100, &slug);
        created.attributes.fields = fields.clone();
        self.events.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_event(
        &self,
        id: u64,
        fields: &EventFields,
        _token: Option<&str>,
    ) -> Result<Event, AppError> {
        self.updates
            .lock()
            .unwrap()
            .push((id, fields.venue.clone()));
        if let Some(err) = &self.write_failure {
            return Err(err.clone());
        }

        let mut events = self.events.lock().unwrap();
        let stored = events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(not_found)?;
        stored.attributes.fields = fields.clone();
        Ok(stored.clone())
    }
}
