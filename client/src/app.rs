//! Root component, HTML shell and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is what the server renders for every route. `App` provides the
//! context shared across pages (`UiState`, `GamesState`) and restores the
//! persisted theme and game stats once the browser has hydrated.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use engine::games::STATS_STORAGE_KEY;

use crate::components::navbar::Navbar;
use crate::pages::ai_games::AiGamesPage;
use crate::pages::home::HomePage;
use crate::pages::iq_test::IqTestPage;
use crate::pages::results::ResultsPage;
use crate::state::games::GamesState;
use crate::state::ui::UiState;
use crate::util::{dark_mode, storage};

/// Document shell used for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let games = RwSignal::new(GamesState::default());
    provide_context(ui);
    provide_context(games);

    // Browser-only restore; runs once after mount.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        games.update(|g| g.load(storage::load_json(STATS_STORAGE_KEY)));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ai-iq.css" />
        <Title text="AI IQ" />
        <Router>
            <div class="app">
                <Navbar />
                <main class="app__main">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=StaticSegment("iq-test") view=IqTestPage />
                        <Route path=StaticSegment("ai-games") view=AiGamesPage />
                        <Route path=StaticSegment("results") view=ResultsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="page page--narrow empty-state">
            <h1 class="empty-state__title">"Page not found"</h1>
            <p class="empty-state__text">"That route does not exist."</p>
            <a class="btn btn--primary" href="/">"Back home"</a>
        </section>
    }
}
