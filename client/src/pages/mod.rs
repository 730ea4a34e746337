//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, transition
//! calls, resume navigation). Redirect decisions belong to the route
//! guard at the router root, never to individual pages.

pub mod checkout;
pub mod course;
pub mod explore;
pub mod home;
pub mod landing;
pub mod login;
pub mod my_courses;
pub mod profile;
pub mod quiz;
pub mod register;
pub mod video;
