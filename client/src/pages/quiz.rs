//! Quiz page. Protected.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn QuizPage() -> impl IntoView {
    let params = use_params_map();
    let quiz_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="quiz-page">
            <h1>{move || format!("Quiz: {}", quiz_id())}</h1>
            <p>"Quiz questions load here."</p>
        </div>
    }
}
