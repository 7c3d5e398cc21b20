//! CardAnimated: карточка с анимацией появления.
//!
//! Анимация определена в `style.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```ignore
//! // С каскадной задержкой для stagger-эффекта
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=80>  // карточка 2
//! ```

use leptos::prelude::*;

/// Delay step between neighbouring cards in a grid.
pub const STAGGER_MS: u32 = 80;

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <div class=format!("card {}", class) style=style>
            {children()}
        </div>
    }
}

/// Delay for the `index`-th card of a grid.
pub fn stagger(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}
