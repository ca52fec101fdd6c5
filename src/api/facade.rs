use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::api::download::DownloadableFile;
use crate::api::envelope::ResponseEnvelope;
use crate::api::log::ErrorLog;
use crate::http::request::Method;
use crate::http::response::StatusCode;
use crate::http::sink::ResponseSink;
use crate::router::RouteBinder;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

const DEFAULT_DISPOSITION: &str = "attachment";

/// Path to human-readable description, for introspection only.
///
/// Serializes as `{"routes": {"/path": "description", ...}}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRegistry {
    routes: BTreeMap<String, String>,
}

impl RouteRegistry {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(p, d)| (p.as_str(), d.as_str()))
    }

    fn record(&mut self, path: &str, description: String) {
        self.routes.insert(path.to_string(), description);
    }
}

/// Route registration plus the response helpers handlers finish with.
///
/// Every JSON helper sets the content type, commits its status and then
/// writes a [`ResponseEnvelope`] carrying that same status. Failures while
/// producing the body go to the [`ErrorLog`] and are otherwise swallowed:
/// by then the status line is already committed.
pub struct ApiFacade<'a, L: ErrorLog + ?Sized = dyn ErrorLog> {
    routes: RouteRegistry,
    log: &'a L,
}

impl<'a, L: ErrorLog + ?Sized> ApiFacade<'a, L> {
    pub fn new(log: &'a L) -> Self {
        Self {
            routes: RouteRegistry::default(),
            log,
        }
    }

    /// Binds `handler` in `router`, then records `description` for `path`.
    ///
    /// A later registration for the same path replaces the description.
    ///
    /// # Errors
    /// Whatever `router` returns from [`RouteBinder::bind`]; the registry is
    /// left unchanged in that case.
    pub fn register_route<R: RouteBinder>(
        &mut self,
        router: &mut R,
        handler: R::Handler,
        method: Method,
        path: &str,
        description: impl Into<String>,
    ) -> Result<(), R::Error> {
        router.bind(method, path, handler)?;
        self.routes.record(path, description.into());
        Ok(())
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    pub fn describe(&self, path: &str) -> Option<&str> {
        self.routes.get(path)
    }

    /// 200 with arbitrary data.
    pub fn send_ok<T: Serialize + ?Sized>(&self, sink: &mut dyn ResponseSink, data: &T) {
        self.send_json(sink, StatusCode::Ok, data);
    }

    /// 400 with a message.
    pub fn send_bad(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.send_json(sink, StatusCode::BadRequest, message);
    }

    /// 403 with a message.
    pub fn send_access_denied(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.send_json(sink, StatusCode::Forbidden, message);
    }

    /// 404 with a message.
    pub fn send_not_found(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.send_json(sink, StatusCode::NotFound, message);
    }

    /// 500 with a message.
    pub fn send_error(&self, sink: &mut dyn ResponseSink, message: &str) {
        self.send_json(sink, StatusCode::InternalServerError, message);
    }

    /// Sends `file` as a raw body. An empty `disposition` means `attachment`.
    ///
    /// Unlike the JSON helpers, a failed body write is not reported.
    pub fn send_download(
        &self,
        sink: &mut dyn ResponseSink,
        file: &DownloadableFile,
        disposition: &str,
    ) {
        let disposition = if disposition.is_empty() {
            DEFAULT_DISPOSITION
        } else {
            disposition
        };

        sink.set_header(
            "Content-Disposition",
            &format!("{disposition}; filename=\"{}\"", file.name),
        );
        sink.set_header("Content-Type", &file.content_type);
        sink.set_header("Content-Length", &file.body.len().to_string());
        sink.set_header("Cache-Control", "no-cache");

        let _ = sink.write_all(&file.body);
    }

    fn send_json<T: Serialize + ?Sized>(
        &self,
        sink: &mut dyn ResponseSink,
        status: StatusCode,
        payload: &T,
    ) {
        sink.set_header("Content-Type", JSON_CONTENT_TYPE);
        sink.write_status(status);

        match ResponseEnvelope::new(status, payload).to_json_line() {
            Ok(body) => {
                if let Err(e) = sink.write_all(&body) {
                    self.log.error("Error sending response", &e);
                }
            }
            Err(e) => self.log.error("Error sending response", &e),
        }
    }
}
