//! Registration page; a successful sign-up signs the user in directly.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use authflow::routes;
use authflow::state::AuthState;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

const MIN_PASSWORD_LEN: usize = 6;

/// Validate the registration form. Returns trimmed `(email, password, name)`.
fn validate_registration(
    email: &str,
    password: &str,
    name: &str,
) -> Result<(String, String, String), &'static str> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err("Please fill in all fields");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok((email.to_owned(), password.to_owned(), name.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().is_loading() {
            return;
        }
        let (email_value, password_value, name_value) = match validate_registration(
            &email.get_untracked(),
            &password.get_untracked(),
            &name.get_untracked(),
        ) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::state::auth::register(auth, &email_value, &password_value, &name_value).await
            {
                navigate(
                    routes::HOME,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (navigate, email_value, password_value, name_value);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Start your learning journey today"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || auth.with(|a| a.error().is_some())>
                    <p class="auth-message auth-message--error">
                        {move || auth.with(|a| a.error().map(ToOwned::to_owned).unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <a href=routes::LOGIN class="auth-link">
                    "Already have an account? Sign in"
                </a>
            </div>
        </div>
    }
}
