//! Explore tab: course catalogue entry points.
//!
//! Catalogue data comes from thin backend queries outside this
//! subsystem; this screen only provides the navigation surface.

use authflow::routes;
use leptos::prelude::*;

use crate::pages::home::TabBar;

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <div class="tab-page explore-page">
            <header class="tab-page__header">
                <h1>"Explore"</h1>
            </header>
            <ul class="course-list">
                <li><a href=routes::course("rust-101")>"Rust 101"</a></li>
                <li><a href=routes::course("web-basics")>"Web Basics"</a></li>
                <li><a href="/checkout?course_ids=rust-101,web-basics">"Enroll in both"</a></li>
            </ul>
            <TabBar/>
        </div>
    }
}
