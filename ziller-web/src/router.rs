use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/werkstatt.html")]
    Service,
    #[at("/kontakt.html")]
    Contact,
    #[at("/impressum.html")]
    Imprint,
    #[at("/datenschutz.html")]
    Privacy,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Entries of the header navigation, in display order.
pub const NAV_ROUTES: [Route; 3] = [Route::Home, Route::Service, Route::Contact];

impl Route {
    /// Page file the route is served as. The root and `index.html` share one page.
    #[must_use]
    pub const fn page_file(self) -> &'static str {
        match self {
            Self::Home | Self::Index => "index.html",
            Self::Service => "werkstatt.html",
            Self::Contact => "kontakt.html",
            Self::Imprint => "impressum.html",
            Self::Privacy => "datenschutz.html",
            Self::NotFound => "404",
        }
    }

    /// Href used in navigation links.
    #[must_use]
    pub fn href(self) -> String {
        match self {
            Self::Home | Self::Index => "/".to_string(),
            other => other.to_path(),
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Home | Self::Index => "nav.home",
            Self::Service => "nav.service",
            Self::Contact => "nav.contact",
            Self::Imprint => "nav.imprint",
            Self::Privacy => "nav.privacy",
            Self::NotFound => "not_found.title",
        }
    }
}
