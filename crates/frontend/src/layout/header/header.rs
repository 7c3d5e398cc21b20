use crate::app_shell::ShellNavigator;
use crate::content::SITE_NAME;
use crate::routes::{Page, Route};
use crate::shared::components::NavLink;
use leptos::prelude::*;

/// Entries of the main menu, in display order.
pub const MENU: [(Page, &str); 4] = [
    (Page::About, "About"),
    (Page::Services, "Services"),
    (Page::CaseStudies, "Case Studies"),
    (Page::Contact, "Contact"),
];

/// Whether the menu entry for `page` is highlighted. Service detail pages
/// highlight "Services".
pub fn is_active(current: &Route, page: Page) -> bool {
    match (current.page(), page) {
        (Page::Service, Page::Services) => true,
        (current, page) => current == page,
    }
}

#[component]
pub fn Header(navigator: ShellNavigator) -> impl IntoView {
    let route = navigator.route();
    let menu_open = RwSignal::new(false);

    // закрываем мобильное меню при любом переходе
    Effect::new(move |_| {
        route.track();
        menu_open.set(false);
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <NavLink navigator=navigator page=Page::Home class="header__title">
                    {SITE_NAME}
                </NavLink>
                <button
                    class="button button--ghost header__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <nav class=move || if menu_open.get() { "header__nav header__nav--open" } else { "header__nav" }>
                    {MENU.iter().map(|(page, label)| {
                        let page = *page;
                        view! {
                            <span class=move || {
                                if route.with(|r| is_active(r, page)) {
                                    "header__item header__item--active"
                                } else {
                                    "header__item"
                                }
                            }>
                                <NavLink navigator=navigator page=page>{*label}</NavLink>
                            </span>
                        }
                    }).collect_view()}
                </nav>
            </div>
        </header>
    }
}
