//! apikit - JSON response envelopes and a discoverable route registry
//!
//! Core library: the [`api`] layer handlers talk to, plus the small HTTP host
//! ([`http`], [`router`], [`server`]) it runs on.

pub mod api;
pub mod config;
pub mod http;
pub mod router;
pub mod server;
