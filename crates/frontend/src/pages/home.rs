use crate::app_shell::ShellNavigator;
use crate::content::faqs::FAQS;
use crate::content::services::CATALOG;
use crate::content::testimonials::TESTIMONIALS;
use crate::routes::{Navigator, Page};
use crate::shared::components::ui::Button;
use crate::shared::components::{stagger, CardAnimated, NavLink, PageHeader};
use leptos::prelude::*;

/// Number of services previewed on the home page.
const FEATURED_SERVICES: usize = 3;

#[component]
pub fn HomePage(navigator: ShellNavigator) -> impl IntoView {
    view! {
        <PageHeader
            title="Automate the busywork. Keep the business."
            subtitle="We design and build automations, AI assistants and integrations that give your team its time back."
        >
            <Button size="lg" on_click=Callback::new(move |_| navigator.go(Page::Contact))>
                "Book a free call"
            </Button>
            <Button variant="secondary" size="lg" on_click=Callback::new(move |_| navigator.go(Page::Services))>
                "See services"
            </Button>
        </PageHeader>

        <section class="section">
            <h2 class="section__title">"What we do"</h2>
            <div class="grid grid--3">
                {CATALOG.iter().take(FEATURED_SERVICES).enumerate().map(|(i, service)| view! {
                    <CardAnimated delay_ms=stagger(i)>
                        <h3 class="card__title">{service.title}</h3>
                        <p class="card__text">{service.short_description}</p>
                        <NavLink navigator=navigator page=Page::Service slug=service.slug class="card__link">
                            "Learn more →"
                        </NavLink>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </section>

        <section class="section section--muted">
            <h2 class="section__title">"What clients say"</h2>
            <div class="grid grid--3">
                {TESTIMONIALS.iter().enumerate().map(|(i, t)| view! {
                    <CardAnimated delay_ms=stagger(i) class="testimonial">
                        <blockquote class="testimonial__quote">{t.quote}</blockquote>
                        <p class="testimonial__author">
                            <strong>{t.author}</strong>
                            {format!(", {} at {}", t.role, t.company)}
                        </p>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </section>

        <section class="section">
            <h2 class="section__title">"Frequently asked questions"</h2>
            <div class="faq">
                {FAQS.iter().map(|faq| view! {
                    <details class="faq__item">
                        <summary class="faq__question">{faq.question}</summary>
                        <p class="faq__answer">{faq.answer}</p>
                    </details>
                }).collect_view()}
            </div>
        </section>
    }
}
