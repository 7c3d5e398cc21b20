use crate::app_shell::ShellNavigator;
use crate::content::case_studies::CASE_STUDIES;
use crate::content::services::Service;
use crate::routes::{Navigator, Page};
use crate::shared::components::ui::Button;
use crate::shared::components::{stagger, CardAnimated, NavLink, PageHeader};
use leptos::prelude::*;

#[component]
pub fn ServiceDetailPage(navigator: ShellNavigator, service: &'static Service) -> impl IntoView {
    let related = CASE_STUDIES
        .iter()
        .filter(|study| study.service == service.slug)
        .collect::<Vec<_>>();

    view! {
        <PageHeader title=service.title subtitle=service.short_description>
            <Button size="lg" on_click=Callback::new(move |_| navigator.go(Page::Contact))>
                "Discuss your project"
            </Button>
        </PageHeader>

        <section class="section">
            <NavLink navigator=navigator page=Page::Services class="back-link">"← All services"</NavLink>
            <p class="lead">{service.description}</p>
        </section>

        <section class="section section--split">
            <div>
                <h2 class="section__title">"Benefits"</h2>
                <ul class="check-list">
                    {service.benefits.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                </ul>
            </div>
            <div>
                <h2 class="section__title">"Tools we use"</h2>
                <ul class="tag-list">
                    {service.tools.iter().map(|t| view! { <li class="tag">{*t}</li> }).collect_view()}
                </ul>
            </div>
        </section>

        <section class="section">
            <h2 class="section__title">"Process"</h2>
            <ol class="steps">
                {service.process.iter().enumerate().map(|(i, step)| view! {
                    <li class="steps__item">
                        <CardAnimated delay_ms=stagger(i)>
                            <span class="steps__number">{i + 1}</span>
                            <h3 class="card__title">{step.title}</h3>
                            <p class="card__text">{step.description}</p>
                        </CardAnimated>
                    </li>
                }).collect_view()}
            </ol>
        </section>

        {(!related.is_empty()).then(|| view! {
            <section class="section section--muted">
                <h2 class="section__title">"Related work"</h2>
                {related.into_iter().map(|study| view! {
                    <article class="case-study case-study--compact">
                        <h3>{study.client}</h3>
                        <p>{study.solution}</p>
                    </article>
                }).collect_view()}
            </section>
        })}
    }
}
