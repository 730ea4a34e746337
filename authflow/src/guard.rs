//! Route guard: the redirect decision function.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluated whenever auth state or the current location changes. The
//! `client` crate runs it from a single effect at the router root and
//! performs the returned redirect with replace-navigation, so history
//! never contains a location the guard would bounce away from.
//!
//! The decision is a small deterministic machine over
//! `{location class x auth state}` and is idempotent: evaluating it again
//! on its own redirect target yields no redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes;
use crate::state::AuthState;

/// Logical location: path segments plus query pairs. Framework-neutral so
/// the guard can be driven from any navigation host (or a test).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteLocation {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl RouteLocation {
    /// Build from a pathname (`/video/v1`) and a search string (`?a=b`).
    #[must_use]
    pub fn parse(pathname: &str, search: &str) -> Self {
        let segments = pathname
            .split('/')
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect();
        let query = search
            .trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (key.to_owned(), value.to_owned())
            })
            .collect();
        Self { segments, query }
    }

    /// Build from a full path with optional query (`/login?redirect_to=x`).
    #[must_use]
    pub fn parse_path(path: &str) -> Self {
        let (pathname, search) = path.split_once('?').unwrap_or((path, ""));
        Self::parse(pathname, search)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Exhaustive classification of every location the app can be at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// First-run onboarding screen at `/`.
    Landing,
    /// Login and register screens.
    AuthGroup,
    /// Locations that require an authenticated user.
    Protected,
    /// Everything else (home, explore, course detail).
    Public,
}

/// Classify a location into exactly one route class.
#[must_use]
pub fn classify(location: &RouteLocation) -> RouteClass {
    match location.segments.first().map(String::as_str) {
        None => RouteClass::Landing,
        Some("login" | "register") => RouteClass::AuthGroup,
        Some("video" | "quiz" | "checkout" | "my-courses" | "profile") => RouteClass::Protected,
        Some(_) => RouteClass::Public,
    }
}

/// A replace-navigation instruction. Never pushes a history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
}

/// Decide whether the current `(state, location)` pair requires a
/// redirect. Rules in priority order:
///
/// 1. never redirect while loading (avoids thrashing on stale state);
/// 2. landing is skipped once launched or when already signed in;
/// 3. protected locations bounce anonymous users to login, carrying
///    resume context;
/// 4. auth screens bounce signed-in users home.
#[must_use]
pub fn evaluate(state: &AuthState, location: &RouteLocation) -> Option<Redirect> {
    if state.is_loading() {
        return None;
    }
    match classify(location) {
        RouteClass::Landing if state.has_launched() || state.is_authenticated() => Some(Redirect {
            path: routes::HOME.to_owned(),
        }),
        RouteClass::Protected if !state.is_authenticated() => Some(Redirect {
            path: login_with_resume(location),
        }),
        RouteClass::AuthGroup if state.is_authenticated() => Some(Redirect {
            path: routes::HOME.to_owned(),
        }),
        _ => None,
    }
}

/// Login path carrying the originally intended location, so a successful
/// sign-in resumes there instead of landing on the home screen.
fn login_with_resume(location: &RouteLocation) -> String {
    let target = location.segments.join("/");
    let mut path = format!("{}?redirect_to={target}", routes::LOGIN);
    if let Some(course_ids) = location.query_value("course_ids") {
        path.push_str("&course_ids=");
        path.push_str(course_ids);
    }
    path
}

/// Where to navigate after a successful login, given the resume context
/// the guard attached to the login location. Defaults to home; anything
/// that is not an in-app path is ignored.
#[must_use]
pub fn resume_target(redirect_to: Option<&str>, course_ids: Option<&str>) -> String {
    let raw = redirect_to.unwrap_or("");
    // Scheme or authority markers mean an external target; never follow.
    if raw.contains(':') || raw.contains("//") {
        return routes::HOME.to_owned();
    }
    let target = raw.trim_matches('/');
    if target.is_empty() {
        return routes::HOME.to_owned();
    }
    match course_ids.filter(|ids| !ids.is_empty()) {
        Some(ids) => format!("/{target}?course_ids={ids}"),
        None => format!("/{target}"),
    }
}
