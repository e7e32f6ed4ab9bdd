//! Speed-math: answer as many arithmetic problems as possible in a minute.

use engine::countdown::format_clock;
use engine::games::GameKind;
use engine::games::speed_math::{SpeedMath, parse_answer};
use leptos::prelude::*;

use crate::components::game_header::GameHeader;
use crate::components::progress_bar::ProgressBar;
use crate::state::games::GamesState;
use crate::util::rng;
use crate::util::timer::Ticker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Feedback {
    Correct,
    Wrong(u32),
    Unreadable,
}

#[component]
pub fn SpeedMathPanel(on_back: Callback<()>) -> impl IntoView {
    let games = expect_context::<RwSignal<GamesState>>();
    let game = RwSignal::new(None::<SpeedMath>);
    let answer = RwSignal::new(String::new());
    let feedback = RwSignal::new(None::<Feedback>);
    let ticker = StoredValue::new(None::<Ticker>);

    let stop_ticker = move || {
        ticker.try_update_value(|t| {
            if let Some(t) = t.take() {
                t.stop();
            }
        });
    };
    on_cleanup(stop_ticker);

    let finish = move || {
        stop_ticker();
        let Some(score) = game.with_untracked(|g| g.as_ref().map(SpeedMath::score)) else {
            return;
        };
        log::debug!("speed-math round over with {score} points");
        if games.try_update(|g| g.record_speed_math(score)).unwrap_or(false) {
            games.with_untracked(GamesState::save);
        }
    };

    let on_start = Callback::new(move |()| {
        stop_ticker();
        let mut rng = rng::seeded();
        game.set(Some(SpeedMath::new(&mut rng)));
        answer.set(String::new());
        feedback.set(None);
        let handle = Ticker::start(1_000, move || {
            let expired = game.try_update(|g| g.as_mut().is_some_and(SpeedMath::tick)).unwrap_or(false);
            if expired {
                finish();
            }
        });
        ticker.set_value(Some(handle));
    });

    let on_reset = Callback::new(move |()| {
        stop_ticker();
        game.set(None);
        feedback.set(None);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(value) = parse_answer(&answer.get_untracked()) else {
            feedback.set(Some(Feedback::Unreadable));
            return;
        };
        let expected = game.with_untracked(|g| g.as_ref().map(|g| g.problem().answer()));
        let mut rng = rng::seeded();
        match game.try_update(|g| g.as_mut().map(|g| g.submit(value, &mut rng))).flatten() {
            Some(Ok(true)) => feedback.set(Some(Feedback::Correct)),
            Some(Ok(false)) => feedback.set(expected.map(Feedback::Wrong)),
            Some(Err(e)) => log::debug!("speed-math answer ignored: {e}"),
            None => {}
        }
        answer.set(String::new());
    };

    let running = move || game.with(|g| g.as_ref().is_some_and(|g| !g.is_over()));
    let remaining = move || game.with(|g| g.as_ref().map_or(0, |g| g.countdown().remaining()));
    let status = Signal::derive(move || {
        game.with(|g| match g {
            None => "60 seconds on the clock".to_owned(),
            Some(g) if g.is_over() => "Time's up!".to_owned(),
            Some(g) => format!("Level {}", g.level()),
        })
    });

    view! {
        <section class="game-panel game-panel--speed-math">
            <GameHeader title=GameKind::SpeedMath.name() status on_back on_reset />

            <Show
                when=move || game.with(Option::is_some)
                fallback=move || {
                    view! {
                        <div class="card speed-math__intro">
                            <p>"Solve as many problems as you can before the timer runs out. Problems get harder as your score climbs."</p>
                            <p class="speed-math__best">
                                {move || format!("Best score: {}", games.with(|g| g.stats.speed_math_best))}
                            </p>
                            <button class="btn btn--primary" on:click=move |_| on_start.run(())>"Start"</button>
                        </div>
                    }
                }
            >
                <div class="speed-math__clock" class:speed-math__clock--urgent=move || remaining() <= 10>
                    {move || format_clock(remaining())}
                </div>
                <ProgressBar
                    percent=Signal::derive(move || {
                        f64::from(remaining()) * 100.0 / f64::from(engine::games::speed_math::ROUND_SECS)
                    })
                    urgent=Signal::derive(move || remaining() <= 10)
                />

                <div class="speed-math__stats">
                    <span>{move || format!("Score {}", game.with(|g| g.as_ref().map_or(0, SpeedMath::score)))}</span>
                    <span>{move || format!("Streak {}", game.with(|g| g.as_ref().map_or(0, SpeedMath::streak)))}</span>
                    <span>
                        {move || format!("Best streak {}", game.with(|g| g.as_ref().map_or(0, SpeedMath::best_streak)))}
                    </span>
                </div>

                <Show
                    when=running
                    fallback=move || {
                        view! {
                            <div class="card speed-math__over">
                                <p class="speed-math__final">
                                    {move || {
                                        game.with(|g| {
                                            g.as_ref()
                                                .map(|g| format!("{} correct out of {} attempts", g.score(), g.attempts()))
                                                .unwrap_or_default()
                                        })
                                    }}
                                </p>
                                <button class="btn btn--primary" on:click=move |_| on_start.run(())>"Play Again"</button>
                            </div>
                        }
                    }
                >
                    <form class="speed-math__form" on:submit=on_submit>
                        <span class="speed-math__problem">
                            {move || game.with(|g| g.as_ref().map(|g| format!("{} = ?", g.problem().prompt())))}
                        </span>
                        <input
                            class="speed-math__input"
                            type="text"
                            inputmode="numeric"
                            autocomplete="off"
                            bind:value=answer
                        />
                        <button class="btn btn--primary" type="submit">"Answer"</button>
                    </form>
                    {move || {
                        feedback
                            .get()
                            .map(|f| match f {
                                Feedback::Correct => view! { <p class="feedback outcome--win">"Correct!"</p> }.into_any(),
                                Feedback::Wrong(expected) => {
                                    view! { <p class="feedback outcome--lose">{format!("Not quite, it was {expected}")}</p> }
                                        .into_any()
                                }
                                Feedback::Unreadable => {
                                    view! { <p class="feedback outcome--draw">"Type a whole number"</p> }.into_any()
                                }
                            })
                    }}
                </Show>
            </Show>
        </section>
    }
}
