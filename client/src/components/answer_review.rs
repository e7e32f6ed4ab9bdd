//! Post-test list of each question with the player's answer and the
//! explanation.

use leptos::prelude::*;

use crate::state::quiz::ReviewItem;

#[component]
pub fn AnswerReview(items: Vec<ReviewItem>) -> impl IntoView {
    view! {
        <ol class="answer-review">
            {items
                .into_iter()
                .map(|item| {
                    let chosen = item.chosen_text().unwrap_or("No answer (time ran out)");
                    let answer = item.answer_text();
                    view! {
                        <li class="answer-review__item" class:answer-review__item--correct=item.correct>
                            <p class="answer-review__prompt">
                                <span class="badge">{item.question.category.label()}</span>
                                {item.question.prompt}
                            </p>
                            <p class="answer-review__chosen">"Your answer: " {chosen}</p>
                            {(!item.correct)
                                .then(|| view! { <p class="answer-review__answer">"Correct answer: " {answer}</p> })}
                            <p class="answer-review__explanation">{item.question.explanation}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
