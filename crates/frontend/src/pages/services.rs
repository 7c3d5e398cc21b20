use crate::app_shell::ShellNavigator;
use crate::content::services::CATALOG;
use crate::routes::Page;
use crate::shared::components::{stagger, CardAnimated, NavLink, PageHeader};
use leptos::prelude::*;

#[component]
pub fn ServicesPage(navigator: ShellNavigator) -> impl IntoView {
    view! {
        <PageHeader
            title="Services"
            subtitle="Pick a starting point. Most engagements combine two or three of these."
        />

        <section class="section">
            <div class="grid grid--3">
                {CATALOG.iter().enumerate().map(|(i, service)| view! {
                    <CardAnimated delay_ms=stagger(i)>
                        <h3 class="card__title">{service.title}</h3>
                        <p class="card__text">{service.short_description}</p>
                        <ul class="tag-list">
                            {service.tools.iter().map(|tool| view! { <li class="tag">{*tool}</li> }).collect_view()}
                        </ul>
                        <NavLink navigator=navigator page=Page::Service slug=service.slug class="card__link">
                            "Details →"
                        </NavLink>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </section>
    }
}
