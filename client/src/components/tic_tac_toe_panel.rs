//! Tic-tac-toe against the greedy win/block AI.

use engine::games::GameKind;
use engine::games::tictactoe::{Mark, RoundStatus, TicTacToe};
use leptos::prelude::*;

use crate::components::game_header::GameHeader;
use crate::components::score_board::ScoreBoard;
use crate::state::games::GamesState;
use crate::util::rng;
use crate::util::timer::{self, Generation};

pub const AI_MOVE_DELAY_MS: u32 = 600;

#[component]
pub fn TicTacToePanel(on_back: Callback<()>) -> impl IntoView {
    let games = expect_context::<RwSignal<GamesState>>();
    let game = RwSignal::new(TicTacToe::new());
    let generation = Generation::new();

    on_cleanup({
        let generation = generation.clone();
        move || {
            generation.bump();
        }
    });

    let record = move |status: RoundStatus| {
        if games.try_update(|g| g.record_tic_tac_toe(status)).unwrap_or(false) {
            games.with_untracked(GamesState::save);
        }
    };

    let on_cell = {
        let generation = generation.clone();
        move |cell: usize| {
            let status = match game.try_update(|g| g.play_player(cell)) {
                Some(Ok(status)) => status,
                Some(Err(e)) => {
                    log::debug!("tic-tac-toe move rejected: {e}");
                    return;
                }
                None => return,
            };
            if status != RoundStatus::Turn(TicTacToe::AI) {
                record(status);
                return;
            }
            let captured = generation.current();
            let generation = generation.clone();
            timer::after(AI_MOVE_DELAY_MS, move || {
                if !generation.is_current(captured) {
                    return;
                }
                let mut rng = rng::seeded();
                if game.try_update(|g| g.play_ai(&mut rng)).flatten().is_none() {
                    return;
                }
                record(game.with_untracked(TicTacToe::status));
            });
        }
    };

    let on_reset = Callback::new({
        let generation = generation.clone();
        move |()| {
            generation.bump();
            game.set(TicTacToe::new());
        }
    });
    let on_new_round = Callback::new(move |()| {
        generation.bump();
        game.update(TicTacToe::new_round);
    });

    view! {
        <section class="game-panel game-panel--ttt">
            <GameHeader
                title=GameKind::TicTacToe.name()
                status=Signal::derive(move || status_text(game.with(TicTacToe::status)).to_owned())
                on_back
                on_reset
            />

            <ScoreBoard
                player=Signal::derive(move || game.with(|g| g.tally().wins))
                ai=Signal::derive(move || game.with(|g| g.tally().losses))
                draws=Signal::derive(move || game.with(|g| g.tally().draws))
            />

            <div class="ttt-board">
                {(0..9)
                    .map(|cell| {
                        let on_cell = on_cell.clone();
                        let mark = move || game.with(|g| g.board().get(cell));
                        let winning = move || {
                            matches!(
                                game.with(TicTacToe::status),
                                RoundStatus::Won { line, .. } if line.contains(&cell)
                            )
                        };
                        view! {
                            <button
                                class="ttt-board__cell"
                                class:ttt-board__cell--x=move || mark() == Some(Mark::X)
                                class:ttt-board__cell--o=move || mark() == Some(Mark::O)
                                class:ttt-board__cell--winning=winning
                                disabled=move || {
                                    mark().is_some() || game.with(TicTacToe::status) != RoundStatus::Turn(TicTacToe::PLAYER)
                                }
                                on:click=move |_| on_cell(cell)
                            >
                                {move || mark().map_or("", Mark::symbol)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || game.with(TicTacToe::is_over)>
                <button class="btn btn--primary" on:click=move |_| on_new_round.run(())>
                    "Play Again"
                </button>
            </Show>
        </section>
    }
}

pub fn status_text(status: RoundStatus) -> &'static str {
    match status {
        RoundStatus::Turn(mark) if mark == TicTacToe::PLAYER => "Your turn",
        RoundStatus::Turn(_) => "AI is thinking...",
        RoundStatus::Won { by, .. } if by == TicTacToe::PLAYER => "You win!",
        RoundStatus::Won { .. } => "AI wins!",
        RoundStatus::Draw => "It's a draw!",
    }
}
