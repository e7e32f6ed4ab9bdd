//! Rock-paper-scissors against the pattern-countering AI.
//!
//! The AI "thinks" for a fixed delay before answering; input is disabled
//! meanwhile. Reset or leaving the page bumps a generation counter so a
//! pending reply is dropped.

use engine::games::GameKind;
use engine::games::rps::{Move, Outcome, Round, RpsMatch};
use leptos::prelude::*;

use crate::components::game_header::GameHeader;
use crate::components::score_board::ScoreBoard;
use crate::state::games::GamesState;
use crate::util::rng;
use crate::util::timer::{self, Generation};

pub const AI_THINKING_MS: u32 = 1_500;

/// Rounds shown in the history strip.
const RECENT_ROUNDS: usize = 5;

#[component]
pub fn RpsPanel(on_back: Callback<()>) -> impl IntoView {
    let games = expect_context::<RwSignal<GamesState>>();
    let game = RwSignal::new(RpsMatch::new());
    let thinking = RwSignal::new(false);
    let generation = Generation::new();

    on_cleanup({
        let generation = generation.clone();
        move || {
            generation.bump();
        }
    });

    let play = {
        let generation = generation.clone();
        move |player: Move| {
            if thinking.get_untracked() {
                return;
            }
            thinking.set(true);
            let captured = generation.current();
            let generation = generation.clone();
            timer::after(AI_THINKING_MS, move || {
                if !generation.is_current(captured) {
                    return;
                }
                let mut rng = rng::seeded();
                let Some(round) = game.try_update(|g| g.play(player, &mut rng)) else {
                    return;
                };
                thinking.set(false);
                log::debug!("rps round: {:?} vs {:?} -> {:?}", round.player, round.ai, round.outcome);
                games.update(|g| g.record_rps(round.outcome));
                games.with_untracked(GamesState::save);
            });
        }
    };

    let on_reset = Callback::new(move |()| {
        generation.bump();
        thinking.set(false);
        game.update(RpsMatch::reset);
    });

    view! {
        <section class="game-panel game-panel--rps">
            <GameHeader
                title=GameKind::RockPaperScissors.name()
                status=Signal::derive(move || format!("Round {}", game.with(RpsMatch::round_number)))
                on_back
                on_reset
            />

            <ScoreBoard
                player=Signal::derive(move || game.with(RpsMatch::player_score))
                ai=Signal::derive(move || game.with(RpsMatch::ai_score))
            />

            {move || game.with(|g| g.last_round().copied()).map(|round| view! { <RoundResult round /> })}

            <div class="rps-moves">
                {Move::ALL
                    .into_iter()
                    .map(|mv| {
                        let play = play.clone();
                        view! {
                            <button
                                class="btn rps-moves__move"
                                disabled=move || thinking.get()
                                on:click=move |_| play(mv)
                            >
                                <span class="rps-moves__emoji">{mv.emoji()}</span>
                                <span>{mv.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || thinking.get()>
                <p class="thinking">"⚡ AI is thinking..."</p>
            </Show>

            <ol class="rps-history">
                {move || {
                    game.with(|g| {
                        g.history()
                            .iter()
                            .rev()
                            .take(RECENT_ROUNDS)
                            .map(|r| {
                                view! {
                                    <li class=format!("rps-history__round {}", outcome_class(r.outcome))>
                                        {format!("{} vs {}", r.player.emoji(), r.ai.emoji())}
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ol>
        </section>
    }
}

#[component]
fn RoundResult(round: Round) -> impl IntoView {
    view! {
        <div class="card rps-result">
            <div class="rps-result__moves">
                <div class="rps-result__side">
                    <span class="rps-result__emoji">{round.player.emoji()}</span>
                    <span>"You"</span>
                </div>
                <span class="rps-result__vs">"VS"</span>
                <div class="rps-result__side">
                    <span class="rps-result__emoji">{round.ai.emoji()}</span>
                    <span>"AI"</span>
                </div>
            </div>
            <p class=format!("rps-result__headline {}", outcome_class(round.outcome))>{round.outcome.headline()}</p>
        </div>
    }
}

/// CSS modifier for an outcome, from the player's side.
pub fn outcome_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "outcome--win",
        Outcome::Lose => "outcome--lose",
        Outcome::Draw => "outcome--draw",
    }
}
