//! Profile tab: account details, password change, logout. Protected.

use authflow::state::AuthState;
use leptos::prelude::*;

use crate::pages::home::TabBar;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let new_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let identity = move || {
        auth.with(|a| {
            a.user()
                .map(|u| (u.name.clone(), u.email.clone(), format!("{:?}", u.role)))
        })
        .unwrap_or_default()
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let password_value = new_password.get_untracked();
        if password_value.len() < 6 {
            info.set("Password must be at least 6 characters".to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_password(&password_value).await {
                Ok(()) => {
                    new_password.set(String::new());
                    info.set("Password updated.".to_owned());
                }
                Err(e) => info.set(format!("Password update failed: {e}")),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = password_value;
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::auth::logout(auth).await;
        });
    };

    view! {
        <div class="tab-page profile-page">
            <header class="tab-page__header">
                <h1>"Profile"</h1>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </header>
            <dl class="profile-details">
                <dt>"Name"</dt>
                <dd>{move || identity().0}</dd>
                <dt>"Email"</dt>
                <dd>{move || identity().1}</dd>
                <dt>"Role"</dt>
                <dd>{move || identity().2}</dd>
            </dl>
            <form class="auth-form" on:submit=on_change_password>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="New Password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Change Password"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
            <TabBar/>
        </div>
    }
}
