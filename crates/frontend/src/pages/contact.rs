use crate::content::CONTACT_EMAIL;
use crate::domain::contact::ui::ContactForm;
use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageHeader
            title="Contact"
            subtitle="Tell us what slows your team down. We reply within one business day."
        />

        <section class="section section--split">
            <ContactForm />
            <aside class="contact-aside">
                <h2 class="section__title">"Prefer email?"</h2>
                <p>
                    "Write to "
                    <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
                </p>
            </aside>
        </section>
    }
}
