use crate::app_shell::ShellNavigator;
use crate::content::services::CATALOG;
use crate::content::{CONTACT_EMAIL, SITE_NAME};
use crate::layout::header::header::MENU;
use crate::routes::Page;
use crate::shared::components::NavLink;
use leptos::prelude::*;

#[component]
pub fn Footer(navigator: ShellNavigator) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <strong>{SITE_NAME}</strong>
                    <p>"Automation, AI assistants and integrations for growing teams."</p>
                    <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                </div>
                <nav class="footer__column">
                    <strong>"Company"</strong>
                    {MENU.iter().map(|(page, label)| view! {
                        <NavLink navigator=navigator page=*page>{*label}</NavLink>
                    }).collect_view()}
                </nav>
                <nav class="footer__column">
                    <strong>"Services"</strong>
                    {CATALOG.iter().map(|service| view! {
                        <NavLink navigator=navigator page=Page::Service slug=service.slug>
                            {service.title}
                        </NavLink>
                    }).collect_view()}
                </nav>
            </div>
            <p class="footer__copyright">{format!("© {}", SITE_NAME)}</p>
        </footer>
    }
}
