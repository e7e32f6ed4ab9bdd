//! Results route: cognitive profile built from the last stored test result,
//! plus lifetime game records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stored result is read in an effect after hydration, so the server and
//! the first client render both show the loading card. A missing or
//! unreadable blob lands on the "no results" card rather than an error.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use engine::analysis::{IqBand, NEXT_STEPS, Ranking, format_completed_at, format_duration, pace_label, strengths};
use engine::games::{GameStats, Tally};
use engine::result::{RESULTS_STORAGE_KEY, TestResult};
use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::state::games::GamesState;
use crate::util::storage;

/// Completion time that fills the time bar.
const TIME_BAR_FULL_SECS: u32 = 1_800;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Loaded {
    Loading,
    Empty,
    Ready(TestResult),
}

/// Decode a stored result; anything unreadable counts as absent.
fn parse_stored(raw: Option<&str>) -> Option<TestResult> {
    match TestResult::from_json(raw?) {
        Ok(result) => Some(result),
        Err(e) => {
            log::warn!("discarding stored test result: {e}");
            None
        }
    }
}

fn time_bar_percent(secs: u32) -> f64 {
    (f64::from(secs) / f64::from(TIME_BAR_FULL_SECS) * 100.0).min(100.0)
}

fn tally_text(tally: Tally) -> String {
    format!("{}W / {}L / {}D", tally.wins, tally.losses, tally.draws)
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let loaded = RwSignal::new(Loaded::Loading);

    Effect::new(move || {
        let stored = parse_stored(storage::load_raw(RESULTS_STORAGE_KEY).as_deref());
        loaded.set(stored.map_or(Loaded::Empty, Loaded::Ready));
    });

    let on_clear = Callback::new(move |()| {
        storage::remove(RESULTS_STORAGE_KEY);
        loaded.set(Loaded::Empty);
    });

    view! {
        <div class="page results">
            {move || match loaded.get() {
                Loaded::Loading => {
                    view! {
                        <div class="loading">
                            <span class="loading__spinner"></span>
                            <p>"Loading your results..."</p>
                        </div>
                    }
                        .into_any()
                }
                Loaded::Empty => view! { <NoResults /> }.into_any(),
                Loaded::Ready(result) => view! { <Profile result on_clear /> }.into_any(),
            }}
            <GameRecords />
        </div>
    }
}

#[component]
fn NoResults() -> impl IntoView {
    view! {
        <section class="card empty-state">
            <span class="empty-state__icon">"🧠"</span>
            <h1 class="empty-state__title">"No Results Found"</h1>
            <p class="empty-state__text">
                "You haven't taken an IQ test yet. Take the test to see your cognitive assessment results here."
            </p>
            <div class="empty-state__actions">
                <a class="btn btn--primary" href="/iq-test">"Take IQ Test"</a>
                <a class="btn btn--outline" href="/">"Go Home"</a>
            </div>
        </section>
    }
}

#[component]
fn Profile(result: TestResult, on_clear: Callback<()>) -> impl IntoView {
    let band = IqBand::classify(result.iq_estimate);
    let ranking = Ranking::for_score(result.iq_estimate);
    let pace = pace_label(result.average_secs());
    let strongest = result.strongest_category();
    let completed = format_completed_at(result.completed_at_ms);
    let accuracy = f64::from(result.percentage);
    let time_fill = time_bar_percent(result.time_spent_secs);

    view! {
        <header class="page-header">
            <h1 class="page-header__title">"Your " <span class="gradient-text">"Cognitive Profile"</span></h1>
            <p class="page-header__lead">"Analysis of your latest IQ test"</p>
        </header>

        <section class=format!("card iq-score iq-score--{}", band.css_modifier())>
            <div class="iq-score__value">{result.iq_estimate}</div>
            <span class="badge badge--accent">{band.label()}</span>
            <p class="iq-score__description">{band.description()}</p>
        </section>

        <div class="stat-grid">
            <article class="card stat-card">
                <h3 class="stat-card__title">"Accuracy"</h3>
                <div class="stat-card__value">{format!("{}%", result.percentage)}</div>
                <ProgressBar percent=Signal::stored(accuracy) />
                <p class="stat-card__note">{format!("{} out of {} correct", result.score, result.total)}</p>
            </article>
            <article class="card stat-card">
                <h3 class="stat-card__title">"Completion Time"</h3>
                <div class="stat-card__value">{format_duration(result.time_spent_secs)}</div>
                <ProgressBar percent=Signal::stored(time_fill) />
                <p class="stat-card__note">{pace}</p>
            </article>
            <article class="card stat-card">
                <h3 class="stat-card__title">"Ranking"</h3>
                <div class="stat-card__value">{format!("Top {}%", ranking.top_percent)}</div>
                <p class="stat-card__note">"Compared to general population"</p>
                <span class="badge">{format!("{} percentile", ranking.percentile_label())}</span>
            </article>
        </div>

        <section class="card breakdown">
            <h2 class="section-title">"By Category"</h2>
            {strongest.map(|c| view! { <p class="breakdown__strongest">"Strongest area: " {c.label()}</p> })}
            <ul class="breakdown__list">
                {result
                    .breakdown
                    .iter()
                    .map(|row| {
                        let percent = f64::from(row.correct) * 100.0 / f64::from(row.total.max(1));
                        view! {
                            <li class="breakdown__row">
                                <span class="breakdown__label">{row.category.label()}</span>
                                <span class="breakdown__count">{format!("{}/{}", row.correct, row.total)}</span>
                                <ProgressBar percent=Signal::stored(percent) />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>

        <section class="card insights">
            <h2 class="section-title">"Insights & Recommendations"</h2>
            <div class="insights__columns">
                <div>
                    <h3>"Strengths"</h3>
                    <ul>{strengths(result.iq_estimate).iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
                </div>
                <div>
                    <h3>"Next Steps"</h3>
                    <ul>{NEXT_STEPS.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
                </div>
            </div>
        </section>

        <div class="results__actions">
            <a class="btn btn--primary btn--lg" href="/ai-games">"Challenge AI Games"</a>
            <a class="btn btn--outline btn--lg" href="/iq-test">"Retake Test"</a>
            <button class="btn btn--outline btn--lg" on:click=move |_| on_clear.run(())>
                "Clear Results"
            </button>
        </div>

        {completed.map(|at| view! { <p class="results__date">"Test completed on " {at}</p> })}
    }
}

#[component]
fn GameRecords() -> impl IntoView {
    let games = expect_context::<RwSignal<GamesState>>();
    let stats = move || games.with(|g| g.stats);

    view! {
        <Show when=move || stats() != GameStats::default()>
            <section class="card game-records">
                <h2 class="section-title">"AI Game Records"</h2>
                <dl class="game-records__list">
                    <dt>"Rock Paper Scissors"</dt>
                    <dd>{move || tally_text(stats().rock_paper_scissors)}</dd>
                    <dt>"Tic-Tac-Toe"</dt>
                    <dd>{move || tally_text(stats().tic_tac_toe)}</dd>
                    <dt>"Memory Challenge"</dt>
                    <dd>{move || format!("Best: {} rounds", stats().memory_best)}</dd>
                    <dt>"Speed Math"</dt>
                    <dd>{move || format!("Best: {} points", stats().speed_math_best)}</dd>
                </dl>
            </section>
        </Show>
    }
}
