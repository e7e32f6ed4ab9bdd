//! Landing page: hero, feature overview and calls to action.

use leptos::prelude::*;

/// `(icon, title, description)` for the feature grid.
const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🧠",
        "Adaptive IQ Testing",
        "Questions get harder or easier as you answer, so every run is tuned to how you are thinking.",
    ),
    (
        "🎮",
        "Strategic AI Games",
        "Challenge computer opponents in games designed to test memory, speed and strategy.",
    ),
    ("⚡", "Instant Analysis", "See your estimated IQ, pace and category strengths the moment you finish."),
    ("🏆", "Progress Tracking", "Your latest result and game records are kept in this browser between visits."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <section class="hero">
                <span class="hero__tag">"Next-Gen Intelligence Testing"</span>
                <h1 class="hero__title">
                    "Test Your " <span class="gradient-text">"Intelligence"</span> <br /> "Against AI"
                </h1>
                <p class="hero__lead">
                    "Take an adaptive IQ test and challenge AI opponents in games built to push your mental limits."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--lg" href="/iq-test">"Start IQ Test"</a>
                    <a class="btn btn--outline btn--lg" href="/ai-games">"Challenge AI"</a>
                </div>
            </section>

            <section class="features">
                <h2 class="section-title">"How It Works"</h2>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, description)| {
                            view! {
                                <article class="card feature">
                                    <span class="feature__icon">{icon}</span>
                                    <h3 class="feature__title">{title}</h3>
                                    <p class="feature__text">{description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="cta card">
                <h2 class="section-title">"Ready to Discover Your Cognitive Potential?"</h2>
                <p>"It takes about ten minutes. Your results stay on this device."</p>
                <a class="btn btn--primary btn--lg" href="/iq-test">"Begin Your Journey"</a>
            </section>
        </div>
    }
}
