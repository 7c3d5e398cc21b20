pub mod footer;
pub mod header;

use crate::app_shell::ShellNavigator;
use leptos::prelude::*;

/// Page frame.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(navigator: ShellNavigator, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header navigator=navigator />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer navigator=navigator />
        </div>
    }
}
