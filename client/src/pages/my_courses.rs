//! My Courses tab. Protected: the guard only lets authenticated users here.

use leptos::prelude::*;

use crate::pages::home::TabBar;

#[component]
pub fn MyCoursesPage() -> impl IntoView {
    view! {
        <div class="tab-page my-courses-page">
            <header class="tab-page__header">
                <h1>"My Courses"</h1>
            </header>
            <p>"Courses you are enrolled in appear here."</p>
            <TabBar/>
        </div>
    }
}
