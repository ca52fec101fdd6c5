//! The layer application handlers talk to.
//!
//! [`ApiFacade`] records a description for every route it registers and
//! finishes requests with either a JSON [`ResponseEnvelope`] or a raw
//! [`DownloadableFile`].

pub mod download;
pub mod envelope;
pub mod facade;
pub mod log;

pub use download::DownloadableFile;
pub use envelope::ResponseEnvelope;
pub use facade::{ApiFacade, JSON_CONTENT_TYPE, RouteRegistry};
pub use log::{ErrorLog, TracingLog};
