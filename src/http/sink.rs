//! The per-request response writer handed to handlers.

use std::collections::HashMap;
use std::io;

use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Where a handler writes its response.
///
/// Headers may be set until the status line is committed, either explicitly
/// through [`ResponseSink::write_status`] or implicitly (as `200 OK`) by the
/// first body write. After that, header changes are ignored.
pub trait ResponseSink: io::Write {
    /// Sets a header, replacing any previous value under the same name.
    fn set_header(&mut self, name: &str, value: &str);

    /// Commits the status line. Only the first call has any effect.
    fn write_status(&mut self, status: StatusCode);
}

/// In-memory [`ResponseSink`] that the connection turns into a [`Response`].
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed status, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Finishes the exchange. A handler that wrote nothing yields `200 OK`
    /// with an empty body.
    pub fn into_response(self) -> Response {
        ResponseBuilder::new(self.status.unwrap_or(StatusCode::Ok))
            .headers(self.headers)
            .body(self.body)
            .build()
    }
}

impl ResponseSink for ResponseRecorder {
    fn set_header(&mut self, name: &str, value: &str) {
        if self.status.is_some() {
            tracing::debug!(header = name, "header set after status was written, ignoring");
            return;
        }
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.to_string());
    }

    fn write_status(&mut self, status: StatusCode) {
        match self.status {
            Some(current) => tracing::warn!(
                current = current.as_u16(),
                attempted = status.as_u16(),
                "superfluous write_status call"
            ),
            None => self.status = Some(status),
        }
    }
}

impl io::Write for ResponseRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.status = Some(StatusCode::Ok);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
