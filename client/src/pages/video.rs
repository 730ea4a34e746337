//! Video lesson page. Protected.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn VideoPage() -> impl IntoView {
    let params = use_params_map();
    let video_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="video-page">
            <h1>{move || format!("Lesson: {}", video_id())}</h1>
            <div class="video-page__player">"Video player placeholder"</div>
        </div>
    }
}
