//! Root application component with routing, context providers, and the
//! route guard boundary.

use authflow::guard::{self, RouteLocation};
use authflow::session::SessionSnapshot;
use authflow::state::AuthState;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{
    checkout::CheckoutPage, course::CoursePage, explore::ExplorePage, home::HomePage,
    landing::LandingPage, login::LoginPage, my_courses::MyCoursesPage, profile::ProfilePage,
    quiz::QuizPage, register::RegisterPage, video::VideoPage,
};
use crate::util::session_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Seeds auth state from the persisted snapshot, kicks off the startup
/// reconciler, and sets up client-side routing behind the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Pre-populate auth state from the last persisted snapshot. The state
    // stays in loading until the reconciler has checked the provider, so
    // the guard makes no decision on unverified flags.
    let initial = session_store::load().map_or_else(AuthState::new, SessionSnapshot::restore);
    let auth = RwSignal::new(initial);
    provide_context(auth);

    // Startup reconciler: once per process lifetime.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::auth::check_auth_status(auth).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/learndeck.css"/>
        <Title text="LearnDeck"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("explore") view=ExplorePage/>
                <Route path=StaticSegment("my-courses") view=MyCoursesPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("checkout") view=CheckoutPage/>
                <Route path=(StaticSegment("course"), ParamSegment("id")) view=CoursePage/>
                <Route path=(StaticSegment("video"), ParamSegment("id")) view=VideoPage/>
                <Route path=(StaticSegment("quiz"), ParamSegment("id")) view=QuizPage/>
            </Routes>
        </Router>
    }
}

/// Controlled effect boundary for the route guard.
///
/// Re-evaluates the pure decision function on every auth-state or
/// location change and applies its verdict with replace-navigation, so
/// the back stack never contains a location the guard would bounce away
/// from again.
#[component]
fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let current = RouteLocation::parse(&location.pathname.get(), &location.search.get());
        let decision = auth.with(|state| guard::evaluate(state, &current));
        if let Some(redirect) = decision {
            navigate(
                &redirect.path,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}
