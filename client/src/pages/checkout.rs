//! Checkout page. Protected: reaching it anonymously bounces through the
//! login screen, which carries the course selection along as resume context.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

/// Splits a `course_ids` query value into individual course ids,
/// dropping empty entries left by stray commas.
fn parse_course_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let query = use_query_map();
    let course_ids = move || {
        query.with(|q| {
            q.get("course_ids")
                .map(|raw| parse_course_ids(&raw))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            <Show
                when=move || !course_ids().is_empty()
                fallback=|| view! { <p>"Your cart is empty."</p> }
            >
                <ul class="checkout-items">
                    <For
                        each=course_ids
                        key=Clone::clone
                        children=|id: String| view! { <li>{id}</li> }
                    />
                </ul>
                <button class="btn">"Pay now"</button>
            </Show>
        </div>
    }
}
