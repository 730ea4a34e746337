//! Course detail page. Public: anyone can browse a course; enrolling,
//! watching, and quizzing are behind the guard.

use authflow::routes;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn CoursePage() -> impl IntoView {
    let params = use_params_map();
    let course_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="course-page">
            <h1>{move || format!("Course: {}", course_id())}</h1>
            <ul class="course-actions">
                <li><a href=move || routes::video(&course_id())>"Watch the first lesson"</a></li>
                <li><a href=move || routes::quiz(&course_id())>"Take the quiz"</a></li>
                <li>
                    <a href=move || format!("{}?course_ids={}", routes::CHECKOUT, course_id())>
                        "Enroll"
                    </a>
                </li>
            </ul>
        </div>
    }
}
