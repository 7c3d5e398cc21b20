use super::history::HistoryBackend;
use super::route::{initial_route, Page, Route};

/// Owns the current [`Route`] and keeps it in step with the history stack.
///
/// There are three ways in: construction (initial load), [`Router::navigate`]
/// (in-app links) and [`Router::on_pop_state`] (browser back/forward). The
/// route is always replaced whole, never patched.
pub struct Router<H: HistoryBackend> {
    current: Route,
    history: H,
}

impl<H: HistoryBackend> Router<H> {
    pub fn new(history: H) -> Self {
        let current = initial_route(history.current_path().as_deref());
        log::debug!("Initial route: {:?}", current);
        Self { current, history }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Replace the route, push its path as a new history entry and scroll to top.
    pub fn navigate(&mut self, page: Page, slug: Option<String>) -> &Route {
        let route = Route::new(page, slug);
        let path = route.to_path();
        self.current = route;
        self.history.push_path(&path);
        self.history.scroll_to_top();
        log::debug!("Navigated to {}", path);
        &self.current
    }

    /// Re-read the location after the browser moved through history.
    /// Nothing is pushed: the browser has already moved the history pointer.
    pub fn on_pop_state(&mut self) -> &Route {
        self.current = initial_route(self.history.current_path().as_deref());
        log::debug!("History moved to {:?}", self.current);
        &self.current
    }
}
