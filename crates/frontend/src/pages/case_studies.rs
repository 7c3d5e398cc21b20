use crate::app_shell::ShellNavigator;
use crate::content::case_studies::CASE_STUDIES;
use crate::content::services::find_by_slug;
use crate::routes::Page;
use crate::shared::components::{stagger, CardAnimated, NavLink, PageHeader};
use leptos::prelude::*;

#[component]
pub fn CaseStudiesPage(navigator: ShellNavigator) -> impl IntoView {
    view! {
        <PageHeader
            title="Case Studies"
            subtitle="A few of the workflows we have taken off our clients' hands."
        />

        <section class="section">
            {CASE_STUDIES.iter().enumerate().map(|(i, study)| view! {
                <CardAnimated delay_ms=stagger(i) class="case-study">
                    <p class="case-study__industry">{study.industry}</p>
                    <h2 class="case-study__client">{study.client}</h2>
                    <h3>"Challenge"</h3>
                    <p>{study.challenge}</p>
                    <h3>"Solution"</h3>
                    <p>{study.solution}</p>
                    <ul class="check-list">
                        {study.results.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                    </ul>
                    {find_by_slug(study.service).map(|service| view! {
                        <NavLink navigator=navigator page=Page::Service slug=service.slug class="card__link">
                            {format!("About {} →", service.title)}
                        </NavLink>
                    })}
                </CardAnimated>
            }).collect_view()}
        </section>
    }
}
