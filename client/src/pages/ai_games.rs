//! AI games hub: a card grid that opens one game panel at a time.

use engine::games::GameKind;
use leptos::prelude::*;

use crate::components::game_card::GameCard;
use crate::components::memory_panel::MemoryPanel;
use crate::components::rps_panel::RpsPanel;
use crate::components::speed_math_panel::SpeedMathPanel;
use crate::components::tic_tac_toe_panel::TicTacToePanel;
use crate::state::games::GamesState;

#[component]
pub fn AiGamesPage() -> impl IntoView {
    let games = expect_context::<RwSignal<GamesState>>();
    let selected = Memo::new(move |_| games.with(|g| g.selected));

    // Leaving the route returns to the grid next time.
    on_cleanup(move || {
        games.try_update(GamesState::close);
    });

    let on_select = Callback::new(move |game: GameKind| games.update(|g| g.open(game)));
    let on_back = Callback::new(move |()| games.update(GamesState::close));

    view! {
        <div class="page ai-games">
            {move || match selected.get() {
                None => view! { <GameGrid on_select /> }.into_any(),
                Some(GameKind::RockPaperScissors) => view! { <RpsPanel on_back /> }.into_any(),
                Some(GameKind::TicTacToe) => view! { <TicTacToePanel on_back /> }.into_any(),
                Some(GameKind::MemorySequence) => view! { <MemoryPanel on_back /> }.into_any(),
                Some(GameKind::SpeedMath) => view! { <SpeedMathPanel on_back /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn GameGrid(on_select: Callback<GameKind>) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">"Challenge the " <span class="gradient-text">"AI"</span></h1>
            <p class="page-header__lead">
                "Test your skills against computer opponents in games designed to push your cognitive limits."
            </p>
        </header>
        <div class="game-grid">
            {GameKind::ALL.into_iter().map(|game| view! { <GameCard game on_select /> }).collect_view()}
        </div>
    }
}
