//! Fixed top navigation with route links and the theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// `(path, label, icon)` for each top-level route.
pub const NAV_ITEMS: [(&str, &str, &str); 4] =
    [("/", "Home", "⌂"), ("/iq-test", "IQ Test", "🧠"), ("/ai-games", "AI Games", "🎮"), ("/results", "Results", "🏆")];

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                <span class="navbar__logo">"🧠"</span>
                <span class="navbar__title">"AI IQ"</span>
            </a>

            <button
                class="navbar__menu-toggle"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_menu)
            >
                "☰"
            </button>

            <div class="navbar__links" class:navbar__links--open=move || ui.get().menu_open>
                {NAV_ITEMS
                    .iter()
                    .map(|&(path, label, icon)| {
                        view! {
                            <a
                                href=path
                                class="navbar__link"
                                class:navbar__link--active=move || pathname.get() == path
                                on:click=move |_| ui.update(UiState::close_menu)
                            >
                                <span class="navbar__icon">{icon}</span>
                                <span>{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="btn navbar__theme"
                on:click=move |_| {
                    let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </nav>
    }
}
