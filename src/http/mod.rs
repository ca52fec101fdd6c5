//! Minimal HTTP/1.1 host.
//!
//! - **`connection`**: per-connection request/response state machine
//! - **`parser`**: parses requests out of a byte buffer
//! - **`request`**: request model and header/query helpers
//! - **`response`**: status codes, response model and builder
//! - **`sink`**: the [`sink::ResponseSink`] handlers write into
//! - **`writer`**: serializes responses onto the socket
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for incoming request data
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch through the router
//!        └──────┬───────────┘
//!               │ Response recorded
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ├─ Keep-Alive → Reading (same connection)
//!               └─ Close → Closed
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod sink;
pub mod writer;
