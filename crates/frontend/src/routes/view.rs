//! Решение о том, что рендерить для текущего маршрута.

use super::route::{Page, Route};
use crate::content::services::{find_by_slug, Service};
use crate::content::SITE_NAME;

/// What the page area actually shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Home,
    About,
    Services,
    ServiceDetail(&'static Service),
    CaseStudies,
    Contact,
}

/// Map a route to a view.
///
/// The router accepts any slug. Here a missing or unknown slug under
/// `Page::Service` renders the services listing, while the route itself is
/// left untouched.
pub fn resolve_view(route: &Route) -> PageView {
    match route.page() {
        Page::Home => PageView::Home,
        Page::About => PageView::About,
        Page::Services => PageView::Services,
        Page::CaseStudies => PageView::CaseStudies,
        Page::Contact => PageView::Contact,
        Page::Service => match route.slug().and_then(find_by_slug) {
            Some(service) => PageView::ServiceDetail(service),
            None => {
                log::debug!("No service for slug {:?}, showing listing", route.slug());
                PageView::Services
            }
        },
    }
}

impl PageView {
    pub fn title(&self) -> String {
        let section = match self {
            PageView::Home => return SITE_NAME.to_string(),
            PageView::About => "About",
            PageView::Services => "Services",
            PageView::ServiceDetail(service) => service.title,
            PageView::CaseStudies => "Case Studies",
            PageView::Contact => "Contact",
        };
        format!("{} | {}", section, SITE_NAME)
    }
}

impl Route {
    /// Document title for this route.
    pub fn title(&self) -> String {
        resolve_view(self).title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slug_resolves_to_detail() {
        match resolve_view(&Route::service("crm-integration")) {
            PageView::ServiceDetail(service) => assert_eq!(service.slug, "crm-integration"),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_unknown_or_missing_slug_falls_back_to_listing() {
        let unknown = Route::service("does-not-exist");
        assert_eq!(resolve_view(&unknown), PageView::Services);
        // the route keeps what the URL said
        assert_eq!(unknown.page(), Page::Service);
        assert_eq!(unknown.slug(), Some("does-not-exist"));

        assert_eq!(resolve_view(&Route::new(Page::Service, None)), PageView::Services);
        assert_eq!(resolve_view(&Route::service("Web-Development")), PageView::Services);
    }

    #[test]
    fn test_plain_pages() {
        assert_eq!(resolve_view(&Route::home()), PageView::Home);
        assert_eq!(resolve_view(&Route::of(Page::About)), PageView::About);
        assert_eq!(resolve_view(&Route::of(Page::Services)), PageView::Services);
        assert_eq!(resolve_view(&Route::of(Page::CaseStudies)), PageView::CaseStudies);
        assert_eq!(resolve_view(&Route::of(Page::Contact)), PageView::Contact);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::home().title(), SITE_NAME);
        assert_eq!(
            Route::of(Page::Contact).title(),
            format!("Contact | {}", SITE_NAME)
        );
        assert_eq!(
            Route::service("ai-chatbots").title(),
            format!("AI Assistants & Chatbots | {}", SITE_NAME)
        );
        assert_eq!(
            Route::service("nope").title(),
            format!("Services | {}", SITE_NAME)
        );
    }
}
