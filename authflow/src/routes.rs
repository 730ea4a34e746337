//! Route path constants shared by the guard and page navigation.

pub const LANDING: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const HOME: &str = "/home";
pub const EXPLORE: &str = "/explore";
pub const MY_COURSES: &str = "/my-courses";
pub const PROFILE: &str = "/profile";
pub const CHECKOUT: &str = "/checkout";

#[must_use]
pub fn course(id: &str) -> String {
    format!("/course/{id}")
}

#[must_use]
pub fn video(id: &str) -> String {
    format!("/video/{id}")
}

#[must_use]
pub fn quiz(id: &str) -> String {
    format!("/quiz/{id}")
}
