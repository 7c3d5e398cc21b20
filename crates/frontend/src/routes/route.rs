//! Route ⇄ URL path mapping.
//!
//! Page names are matched case-insensitively. The service slug is kept exactly
//! as written in the URL; whether it names a catalog entry is decided later by
//! [`super::view::resolve_view`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    CaseStudies,
    Service,
    Contact,
}

impl Page {
    /// Path segment for pages that have one of their own.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::About => Some("about"),
            Page::Services | Page::Service => Some("services"),
            Page::CaseStudies => Some("casestudies"),
            Page::Contact => Some("contact"),
        }
    }
}

/// Pages recognised by the segment scan, in match priority order.
const SCANNED_PAGES: [Page; 4] = [Page::About, Page::Services, Page::CaseStudies, Page::Contact];

/// Current navigation state. `slug` is only ever set for [`Page::Service`];
/// fields are private so every route goes through [`Route::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    page: Page,
    slug: Option<String>,
}

impl Route {
    /// Build a route. A slug passed with any page other than `Service` is dropped.
    pub fn new(page: Page, slug: Option<String>) -> Self {
        let slug = match page {
            Page::Service => slug,
            _ => None,
        };
        Self { page, slug }
    }

    pub fn home() -> Self {
        Self::new(Page::Home, None)
    }

    /// Route to a page that takes no slug.
    pub fn of(page: Page) -> Self {
        Self::new(page, None)
    }

    pub fn service(slug: impl Into<String>) -> Self {
        Self::new(Page::Service, Some(slug.into()))
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Serialize to a URL path.
    pub fn to_path(&self) -> String {
        match (self.page, self.slug.as_deref()) {
            (Page::Home, _) => "/".to_string(),
            (Page::Service, Some(slug)) => format!("/services/{}", urlencoding::encode(slug)),
            (page, _) => format!("/{}", page.segment().unwrap_or_default()),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::home()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A path segment is not valid percent-encoded UTF-8
    Encoding { segment: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Encoding { segment } => {
                write!(f, "path segment {:?} is not valid percent-encoded UTF-8", segment)
            }
        }
    }
}

impl std::error::Error for RouteError {}

fn decode_segment(segment: &str) -> Result<String, RouteError> {
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteError::Encoding {
            segment: segment.to_string(),
        })
}

/// Parse a URL path into a route.
///
/// `/services/{slug}` (checked on the last two segments) wins; otherwise the first
/// known page name found anywhere in the path; otherwise home. Query and fragment
/// are ignored.
pub fn parse_path(path: &str) -> Result<Route, RouteError> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(decode_segment)
        .collect::<Result<Vec<_>, _>>()?;

    if let [.., parent, slug] = segments.as_slice() {
        if parent.eq_ignore_ascii_case("services") {
            return Ok(Route::service(slug.clone()));
        }
    }

    let found = SCANNED_PAGES.into_iter().find(|page| {
        let name = page.segment().unwrap_or_default();
        segments
            .iter()
            .any(|segment| segment.eq_ignore_ascii_case(name))
    });

    Ok(found.map(Route::of).unwrap_or_default())
}

/// Route for the page as loaded. Never fails: anything unparseable, or a missing
/// location, degrades to home with a warning in the console.
pub fn initial_route(path: Option<&str>) -> Route {
    let Some(path) = path else {
        log::warn!("Current location unavailable, falling back to home");
        return Route::home();
    };

    match parse_path(path) {
        Ok(route) => route,
        Err(e) => {
            log::warn!("Unroutable path {:?} ({}), falling back to home", path, e);
            Route::home()
        }
    }
}
