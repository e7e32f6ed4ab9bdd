//! Title bar for an open game: back, title with status line, reset.

use leptos::prelude::*;

#[component]
pub fn GameHeader(
    title: &'static str,
    #[prop(into)] status: Signal<String>,
    on_back: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="game-header">
            <button class="btn btn--outline" on:click=move |_| on_back.run(())>
                "← Back to Games"
            </button>
            <div class="game-header__title">
                <h1>{title}</h1>
                <p class="game-header__status">{move || status.get()}</p>
            </div>
            <button class="btn btn--outline" on:click=move |_| on_reset.run(())>
                "↺ Reset"
            </button>
        </header>
    }
}
