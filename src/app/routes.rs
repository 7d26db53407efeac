use std::fmt;
use url::form_urlencoded;

/// Page routes of the browser application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Event listing; `None` is the first page.
    Events { page: Option<u32> },
    Event { slug: String },
    AddEvent,
    EditEvent { id: u64 },
    Search { term: String },
    Login,
    Register,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn event(slug: impl Into<String>) -> Self {
        Self::Event { slug: slug.into() }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Events { page: None | Some(0 | 1) } => "/events".to_string(),
            Self::Events { page: Some(page) } => format!("/events?page={page}"),
            Self::Event { slug } => format!("/events/{slug}"),
            Self::AddEvent => "/events/add".to_string(),
            Self::EditEvent { id } => format!("/events/edit/{id}"),
            Self::Search { term } => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("term", term)
                    .finish();
                format!("/events/search?{query}")
            }
            Self::Login => "/account/login".to_string(),
            Self::Register => "/account/register".to_string(),
            Self::Dashboard => "/account/dashboard".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
