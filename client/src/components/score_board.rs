//! "You vs AI" score strip shared by the head-to-head games.

use leptos::prelude::*;

#[component]
pub fn ScoreBoard(
    #[prop(into)] player: Signal<u32>,
    #[prop(into)] ai: Signal<u32>,
    #[prop(optional, into)] draws: Option<Signal<u32>>,
) -> impl IntoView {
    view! {
        <div class="score-board">
            <div class="score-board__side score-board__side--player">
                <span class="score-board__value">{move || player.get()}</span>
                <span class="score-board__label">"You"</span>
            </div>
            {draws
                .map(|d| {
                    view! {
                        <div class="score-board__side">
                            <span class="score-board__value">{move || d.get()}</span>
                            <span class="score-board__label">"Draws"</span>
                        </div>
                    }
                })}
            <div class="score-board__side score-board__side--ai">
                <span class="score-board__value">{move || ai.get()}</span>
                <span class="score-board__label">"AI"</span>
            </div>
        </div>
    }
}
