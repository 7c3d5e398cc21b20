use crate::routes::{Navigator, Page, Route};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// True when the click should be handled in-app. Modifier and non-primary
/// clicks are left to the browser (new tab, new window, download).
pub fn is_plain_left_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// Anchor with a real `href` that routes through the navigator on plain clicks.
#[component]
pub fn NavLink<N>(
    navigator: N,
    page: Page,
    #[prop(optional, into)]
    slug: Option<String>,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView
where
    N: Navigator + Copy + Send + Sync + 'static,
{
    let href = Route::new(page, slug.clone()).to_path();

    let on_click = move |ev: MouseEvent| {
        if !is_plain_left_click(
            ev.button(),
            ev.ctrl_key(),
            ev.meta_key(),
            ev.shift_key(),
            ev.alt_key(),
        ) {
            return;
        }
        ev.prevent_default();
        navigator.navigate(page, slug.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_left_click() {
        assert!(is_plain_left_click(0, false, false, false, false));
    }

    #[test]
    fn test_modified_or_other_buttons_pass_through() {
        assert!(!is_plain_left_click(1, false, false, false, false));
        assert!(!is_plain_left_click(2, false, false, false, false));
        assert!(!is_plain_left_click(0, true, false, false, false));
        assert!(!is_plain_left_click(0, false, true, false, false));
        assert!(!is_plain_left_click(0, false, false, true, false));
        assert!(!is_plain_left_click(0, false, false, false, true));
    }
}
