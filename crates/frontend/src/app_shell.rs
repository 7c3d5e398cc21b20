//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `ShellNavigator` - единственный владелец текущего маршрута и истории браузера
//! - `AppShell` - Header + текущая страница + Footer

use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::routes::{BrowserHistory, Navigator, Page, Route, Router};
use leptos::prelude::*;

/// Copy handle to the router.
///
/// The router itself lives in a `StoredValue`; `route` mirrors its current
/// route so views can subscribe to changes.
#[derive(Clone, Copy)]
pub struct ShellNavigator {
    router: StoredValue<Router<BrowserHistory>>,
    route: RwSignal<Route>,
}

impl ShellNavigator {
    pub fn new() -> Self {
        let router = Router::new(BrowserHistory);
        let route = RwSignal::new(router.current().clone());
        Self {
            router: StoredValue::new(router),
            route,
        }
    }

    pub fn route(&self) -> RwSignal<Route> {
        self.route
    }

    /// Browser back/forward.
    pub fn handle_pop_state(&self) {
        let next = self
            .router
            .try_update_value(|router| router.on_pop_state().clone());
        if let Some(next) = next {
            self.route.set(next);
        }
    }
}

impl Default for ShellNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ShellNavigator {
    fn navigate(&self, page: Page, slug: Option<String>) {
        let next = self
            .router
            .try_update_value(|router| router.navigate(page, slug).clone());
        if let Some(next) = next {
            // set, not update-if-changed: a slug-only change must still re-render
            self.route.set(next);
        }
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let navigator = ShellNavigator::new();

    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        navigator.handle_pop_state();
    });

    // Заголовок документа следует за маршрутом
    Effect::new(move |_| {
        let title = navigator.route().with(|route| route.title());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&title);
        }
    });

    view! {
        <Shell navigator=navigator>
            <AppRoutes navigator=navigator />
        </Shell>
    }
}
