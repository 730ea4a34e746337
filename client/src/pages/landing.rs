//! First-run landing screen, shown at most once per install.
//!
//! "Let's start" flips the sticky launch flag before navigating, so the
//! guard skips this screen on every later visit.

use authflow::routes;
use authflow::state::AuthState;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let navigate_login = navigate.clone();

    let on_start = move |_| {
        crate::state::auth::mark_launched(auth);
        navigate(routes::HOME, NavigateOptions::default());
    };
    let on_sign_in = move |_| {
        navigate_login(routes::LOGIN, NavigateOptions::default());
    };

    view! {
        <div class="landing-page">
            <h1>"LearnDeck"</h1>
            <p class="landing-page__tagline">"Learn anything, anywhere."</p>
            <button class="btn btn--primary" on:click=on_start>
                "Let's start"
            </button>
            <button class="btn" on:click=on_sign_in>
                "I already have an account"
            </button>
        </div>
    }
}
