//! Shared client-side state orchestration.
//!
//! DESIGN
//! ======
//! The state machine itself lives in the `authflow` crate; this layer
//! owns the async choreography around it (gateway calls, snapshot
//! persistence) over the shared `RwSignal<AuthState>`.

pub mod auth;
