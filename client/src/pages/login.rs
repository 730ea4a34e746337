//! Login page with post-login resume to the originally intended route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use authflow::routes;
use authflow::state::AuthState;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Validate the login form. Returns trimmed `(email, password)`.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let query = use_query_map();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().is_loading() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        info.set(String::new());
        let redirect_to = query.get_untracked().get("redirect_to");
        let course_ids = query.get_untracked().get("course_ids");
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::state::auth::login(auth, &email_value, &password_value).await {
                let target =
                    authflow::guard::resume_target(redirect_to.as_deref(), course_ids.as_deref());
                navigate(
                    &target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (navigate, email_value, password_value, redirect_to, course_ids);
    };

    let on_forgot = move |_| {
        let email_value = email.get_untracked().trim().to_owned();
        if email_value.is_empty() {
            info.set("Enter your email first.".to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password_for_email(&email_value).await {
                Ok(()) => info.set("Password reset email sent.".to_owned()),
                Err(e) => info.set(format!("Password reset failed: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue your learning journey"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || auth.get().is_loading()
                    >
                        "Sign In"
                    </button>
                </form>
                <button class="auth-link" on:click=on_forgot>
                    "Forgot Password?"
                </button>
                <Show when=move || auth.with(|a| a.error().is_some())>
                    <p class="auth-message auth-message--error">
                        {move || auth.with(|a| a.error().map(ToOwned::to_owned).unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <a href=routes::REGISTER class="auth-link">
                    "New here? Create an account"
                </a>
            </div>
        </div>
    }
}
