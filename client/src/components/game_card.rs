//! Selection card for one game on the AI games hub.

use engine::games::GameKind;
use leptos::prelude::*;

#[component]
pub fn GameCard(game: GameKind, on_select: Callback<GameKind>) -> impl IntoView {
    view! {
        <button class="card game-card" on:click=move |_| on_select.run(game)>
            <span class="game-card__icon">{game_icon(game)}</span>
            <span class="game-card__name">{game.name()}</span>
            <span class="game-card__description">{game.description()}</span>
            <span class=format!("badge badge--{}", game.difficulty().to_lowercase())>{game.difficulty()}</span>
            <span class="btn btn--primary game-card__play">"Play"</span>
        </button>
    }
}

pub fn game_icon(game: GameKind) -> &'static str {
    match game {
        GameKind::RockPaperScissors => "✊",
        GameKind::TicTacToe => "⭕",
        GameKind::MemorySequence => "🧩",
        GameKind::SpeedMath => "➗",
    }
}
