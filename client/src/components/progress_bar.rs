//! Horizontal progress bar.

use leptos::prelude::*;

/// Fills to `percent` (0..=100) of its width.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>, #[prop(optional)] urgent: Option<Signal<bool>>) -> impl IntoView {
    let width = move || format!("width: {:.1}%", percent.get().clamp(0.0, 100.0));
    let is_urgent = move || urgent.is_some_and(|u| u.get());
    view! {
        <div class="progress">
            <div class="progress__fill" class:progress__fill--urgent=is_urgent style=width></div>
        </div>
    }
}
