//! Memory-sequence game: watch the pads light up, then repeat them.
//!
//! DESIGN
//! ======
//! Playback is a chain of `timer::after` calls scheduled up front, one pair
//! (light, unlight) per step plus a final "your turn" handoff. Each playback
//! bumps the panel's generation first, so a reset, a new round or leaving the
//! page silently drops whatever the previous chain still had queued.

use engine::games::GameKind;
use engine::games::memory::{MemoryGame, MemoryPhase, PAD_COUNT, PressOutcome};
use leptos::prelude::*;

use crate::components::game_header::GameHeader;
use crate::state::games::GamesState;
use crate::util::rng;
use crate::util::timer::{self, Generation};

const START_DELAY_MS: u32 = 500;
const FLASH_MS: u32 = 600;
const GAP_MS: u32 = 200;
const PRESS_FLASH_MS: u32 = 250;

const PAD_COLORS: [&str; PAD_COUNT as usize] = ["green", "red", "yellow", "blue"];

#[component]
pub fn MemoryPanel(on_back: Callback<()>) -> impl IntoView {
    let games = expect_context::<RwSignal<GamesState>>();
    let game = RwSignal::new(None::<MemoryGame>);
    let lit = RwSignal::new(None::<u8>);
    let pressed = RwSignal::new(None::<u8>);
    let generation = Generation::new();

    on_cleanup({
        let generation = generation.clone();
        move || {
            generation.bump();
        }
    });

    let on_start = Callback::new({
        let generation = generation.clone();
        move |()| {
            let mut rng = rng::seeded();
            game.set(Some(MemoryGame::new(&mut rng)));
            play_back(game, lit, &generation);
        }
    });

    let on_press = {
        let generation = generation.clone();
        move |pad: u8| {
            let mut rng = rng::seeded();
            let outcome = game.try_update(|g| g.as_mut().map(|g| g.press(pad, &mut rng))).flatten();
            match outcome {
                Some(Ok(PressOutcome::Correct)) => flash_press(pressed, pad),
                Some(Ok(PressOutcome::RoundComplete)) => {
                    flash_press(pressed, pad);
                    play_back(game, lit, &generation);
                }
                Some(Ok(PressOutcome::Mistake { expected })) => {
                    let rounds = game.with_untracked(|g| g.as_ref().map_or(0, MemoryGame::rounds_completed));
                    log::debug!("memory run over at round {rounds}: pressed {pad}, expected {expected}");
                    if games.try_update(|g| g.record_memory(rounds)).unwrap_or(false) {
                        games.with_untracked(GamesState::save);
                    }
                }
                Some(Err(e)) => log::debug!("memory press ignored: {e}"),
                None => {}
            }
        }
    };

    let on_reset = Callback::new({
        let generation = generation.clone();
        move |()| {
            generation.bump();
            lit.set(None);
            game.set(None);
        }
    });

    let phase = move || game.with(|g| g.as_ref().map(MemoryGame::phase));
    let status = Signal::derive(move || {
        game.with(|g| match g {
            None => "Press start when ready".to_owned(),
            Some(g) => match g.phase() {
                MemoryPhase::Showing => format!("Round {}: watch the sequence", g.sequence().len()),
                MemoryPhase::Input => format!("Your turn: {} of {}", g.cursor(), g.sequence().len()),
                MemoryPhase::Over => format!("Game over: {} rounds completed", g.rounds_completed()),
            },
        })
    });

    view! {
        <section class="game-panel game-panel--memory">
            <GameHeader title=GameKind::MemorySequence.name() status on_back on_reset />

            <div class="memory-pads" class:memory-pads--locked=move || phase() != Some(MemoryPhase::Input)>
                {(0..PAD_COUNT)
                    .map(|pad| {
                        let on_press = on_press.clone();
                        view! {
                            <button
                                class=format!("memory-pads__pad memory-pads__pad--{}", PAD_COLORS[usize::from(pad)])
                                class:memory-pads__pad--lit=move || lit.get() == Some(pad) || pressed.get() == Some(pad)
                                disabled=move || phase() != Some(MemoryPhase::Input)
                                on:click=move |_| on_press(pad)
                                aria-label=format!("Pad {}", pad + 1)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="memory-footer">
                <span class="memory-footer__best">
                    {move || format!("Best: {} rounds", games.with(|g| g.stats.memory_best))}
                </span>
                <Show when=move || matches!(phase(), None | Some(MemoryPhase::Over))>
                    <button class="btn btn--primary" on:click=move |_| on_start.run(())>
                        {move || if phase().is_none() { "Start" } else { "Try Again" }}
                    </button>
                </Show>
            </div>
        </section>
    }
}

/// Schedule playback of the current sequence, then hand over to input.
fn play_back(game: RwSignal<Option<MemoryGame>>, lit: RwSignal<Option<u8>>, generation: &Generation) {
    let captured = generation.bump();
    let sequence = game.with_untracked(|g| g.as_ref().map(|g| g.sequence().to_vec())).unwrap_or_default();

    let mut at = START_DELAY_MS;
    for pad in sequence {
        let on = generation.clone();
        timer::after(at, move || {
            if on.is_current(captured) {
                lit.try_update(|l| *l = Some(pad));
            }
        });
        let off = generation.clone();
        timer::after(at + FLASH_MS, move || {
            if off.is_current(captured) {
                lit.try_update(|l| *l = None);
            }
        });
        at += FLASH_MS + GAP_MS;
    }

    let done = generation.clone();
    timer::after(at, move || {
        if done.is_current(captured) {
            game.try_update(|g| {
                if let Some(g) = g.as_mut() {
                    g.finish_playback();
                }
            });
        }
    });
}

fn flash_press(pressed: RwSignal<Option<u8>>, pad: u8) {
    pressed.set(Some(pad));
    timer::after(PRESS_FLASH_MS, move || {
        pressed.try_update(|p| {
            if *p == Some(pad) {
                *p = None;
            }
        });
    });
}
