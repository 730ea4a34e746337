//! # authflow
//!
//! Auth/session domain logic for the LearnDeck client, independent of any
//! UI framework. The `client` crate wires these types into Leptos signals,
//! the Supabase gateway, and browser storage.
//!
//! DESIGN
//! ======
//! Everything here is pure and synchronous: the state container commits
//! whole transitions, the route guard is a decision function over
//! `(state, location)`, and the session snapshot defines the persisted
//! subset of state. Network and storage side effects live in `client`.

pub mod guard;
pub mod routes;
pub mod session;
pub mod state;
