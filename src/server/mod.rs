//! TCP accept loop and the bundled routes.

pub mod listener;
pub mod routes;
