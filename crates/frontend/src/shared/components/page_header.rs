use leptos::prelude::*;

/// Hero block at the top of every page
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Call-to-action area
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            {children.map(|c| view! {
                <div class="page-header__actions">{c()}</div>
            })}
        </section>
    }
}
