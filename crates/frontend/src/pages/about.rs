use crate::app_shell::ShellNavigator;
use crate::content::SITE_NAME;
use crate::routes::{Navigator, Page};
use crate::shared::components::ui::Button;
use crate::shared::components::{stagger, CardAnimated, PageHeader};
use leptos::prelude::*;

const VALUES: &[(&str, &str)] = &[
    ("Outcomes first", "We start from the hours saved and errors avoided, not from the tools."),
    ("Built to be owned", "Everything we ship is documented so your team can run it without us."),
    ("Honest scoping", "If something is not worth automating, we will tell you."),
];

#[component]
pub fn AboutPage(navigator: ShellNavigator) -> impl IntoView {
    view! {
        <PageHeader
            title=format!("About {}", SITE_NAME)
            subtitle="A small team of engineers who like removing tedious work."
        />

        <section class="section">
            <p class="lead">
                "We have spent years inside operations, support and engineering teams. "
                "We saw the same pattern everywhere: skilled people losing hours to copying data between tools. "
                "We started this studio to fix that, one workflow at a time."
            </p>
        </section>

        <section class="section">
            <h2 class="section__title">"How we work"</h2>
            <div class="grid grid--3">
                {VALUES.iter().enumerate().map(|(i, (title, text))| view! {
                    <CardAnimated delay_ms=stagger(i)>
                        <h3 class="card__title">{*title}</h3>
                        <p class="card__text">{*text}</p>
                    </CardAnimated>
                }).collect_view()}
            </div>
        </section>

        <section class="section section--cta">
            <h2 class="section__title">"Have a process in mind?"</h2>
            <Button size="lg" on_click=Callback::new(move |_| navigator.go(Page::Contact))>
                "Get in touch"
            </Button>
        </section>
    }
}
