use std::error::Error;

/// The one logging capability the API layer needs.
pub trait ErrorLog: Send + Sync {
    fn error(&self, message: &str, err: &dyn Error);
}

/// [`ErrorLog`] backed by the process-wide `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ErrorLog for TracingLog {
    fn error(&self, message: &str, err: &dyn Error) {
        tracing::error!(error = %err, "{message}");
    }
}
