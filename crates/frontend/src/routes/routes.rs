use crate::app_shell::ShellNavigator;
use crate::pages::{
    about::AboutPage, case_studies::CaseStudiesPage, contact::ContactPage, home::HomePage,
    service_detail::ServiceDetailPage, services::ServicesPage,
};
use crate::routes::view::{resolve_view, PageView};
use leptos::prelude::*;

/// Page area: re-renders on every route change, including slug-only changes.
#[component]
pub fn AppRoutes(navigator: ShellNavigator) -> impl IntoView {
    let route = navigator.route();

    move || match route.with(resolve_view) {
        PageView::Home => view! { <HomePage navigator=navigator /> }.into_any(),
        PageView::About => view! { <AboutPage navigator=navigator /> }.into_any(),
        PageView::Services => view! { <ServicesPage navigator=navigator /> }.into_any(),
        PageView::ServiceDetail(service) => {
            view! { <ServiceDetailPage navigator=navigator service=service /> }.into_any()
        }
        PageView::CaseStudies => view! { <CaseStudiesPage navigator=navigator /> }.into_any(),
        PageView::Contact => view! { <ContactPage /> }.into_any(),
    }
}
