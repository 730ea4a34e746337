//! Main tab home: the hub every redirect lands on.

use authflow::routes;
use authflow::state::AuthState;
use leptos::prelude::*;

/// Bottom tab bar shared by the main tab screens.
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav class="tab-bar">
            <a href=routes::HOME class="tab-bar__item">"Home"</a>
            <a href=routes::EXPLORE class="tab-bar__item">"Explore"</a>
            <a href=routes::MY_COURSES class="tab-bar__item">"My Courses"</a>
            <a href=routes::PROFILE class="tab-bar__item">"Profile"</a>
        </nav>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.with(|a| a.user().map(|u| format!("Welcome back, {}", u.name)))
            .unwrap_or_else(|| "Welcome to LearnDeck".to_owned())
    };

    view! {
        <div class="tab-page home-page">
            <header class="tab-page__header">
                <h1>{greeting}</h1>
            </header>
            <p>"Pick up where you left off, or find something new in Explore."</p>
            <Show when=move || auth.with(|a| !a.is_authenticated() && !a.is_loading())>
                <a href=routes::LOGIN class="auth-link">"Sign in to track your progress"</a>
            </Show>
            <TabBar/>
        </div>
    }
}
