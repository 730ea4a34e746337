//! Networking modules for the external auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the gateway to Supabase's auth REST surface; `types` defines
//! the provider's wire records and their normalization into domain
//! entities. No local state lives here.

pub mod api;
pub mod types;
