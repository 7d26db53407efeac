use super::{
    auth::{AuthApi, AuthContext, TokenStore},
    routes::Route,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, route: Route },
    /// Calls `AuthContext::logout`.
    Logout,
}

/// Header navigation for the current session.
#[must_use]
pub fn nav_links<A: AuthApi, S: TokenStore>(auth: &AuthContext<A, S>) -> Vec<NavItem> {
    let mut items = vec![NavItem::Link {
        label: "Events",
        route: Route::Events { page: None },
    }];

    if auth.is_authenticated() {
        items.push(NavItem::Link {
            label: "Add Event",
            route: Route::AddEvent,
        });
        items.push(NavItem::Link {
            label: "Dashboard",
            route: Route::Dashboard,
        });
        items.push(NavItem::Logout);
    } else {
        items.push(NavItem::Link {
            label: "Login",
            route: Route::Login,
        });
    }

    items
}
