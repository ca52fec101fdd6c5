//! Exact-match request routing.
//!
//! [`RouteBinder`] is the seam the API layer registers handlers through;
//! [`Router`] is the implementation the bundled server uses.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::http::sink::{ResponseRecorder, ResponseSink};

/// A request handler. `S` is the state shared by every handler of a router.
pub type Handler<S> = Box<dyn Fn(&S, &Request, &mut dyn ResponseSink) + Send + Sync>;

/// Boxes a function or closure as a [`Handler`].
pub fn handler<S, F>(f: F) -> Handler<S>
where
    F: Fn(&S, &Request, &mut dyn ResponseSink) + Send + Sync + 'static,
{
    Box::new(f)
}

/// Something that can bind a handler to a `(method, path)` pair.
pub trait RouteBinder {
    type Handler;
    type Error;

    fn bind(&mut self, method: Method, path: &str, handler: Self::Handler)
    -> Result<(), Self::Error>;
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("route already bound: {method} {path}")]
    Conflict { method: Method, path: String },
}

pub struct Router<S> {
    routes: HashMap<String, BTreeMap<Method, Handler<S>>>,
    fallback: Option<Handler<S>>,
}

impl<S> Default for Router<S> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: None,
        }
    }
}

impl<S> Router<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler for requests no route matches. Without one, those get a plain
    /// `404 Not Found`.
    pub fn fallback(&mut self, handler: Handler<S>) {
        self.fallback = Some(handler);
    }

    pub fn is_bound(&self, method: Method, path: &str) -> bool {
        self.routes
            .get(path)
            .is_some_and(|methods| methods.contains_key(&method))
    }

    /// Number of bound `(method, path)` pairs.
    pub fn len(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Runs the handler matching `req` against `sink`.
    ///
    /// Matching ignores the query string. `HEAD` falls back to the `GET`
    /// handler when no `HEAD` handler is bound. A path that is bound only for
    /// other methods yields `405 Method Not Allowed` with an `Allow` header.
    pub fn dispatch(&self, state: &S, req: &Request, sink: &mut dyn ResponseSink) {
        let path = req.route_path();

        match self.routes.get(path) {
            Some(methods) => match Self::lookup(methods, req.method) {
                Some(handler) => handler(state, req, sink),
                None => {
                    let allow = Self::allowed(methods).join(", ");
                    tracing::debug!(method = %req.method, path, allow = %allow, "method not allowed");
                    write_plain(sink, StatusCode::MethodNotAllowed, Some(&allow));
                }
            },
            None => match &self.fallback {
                Some(handler) => handler(state, req, sink),
                None => write_plain(sink, StatusCode::NotFound, None),
            },
        }
    }
}

impl<S> Router<S> {
    fn lookup(methods: &BTreeMap<Method, Handler<S>>, method: Method) -> Option<&Handler<S>> {
        match methods.get(&method) {
            None if method == Method::HEAD => methods.get(&Method::GET),
            found => found,
        }
    }

    fn allowed(methods: &BTreeMap<Method, Handler<S>>) -> Vec<&'static str> {
        let mut allow: Vec<Method> = methods.keys().copied().collect();
        if methods.contains_key(&Method::GET) && !methods.contains_key(&Method::HEAD) {
            allow.push(Method::HEAD);
            allow.sort();
        }
        allow.into_iter().map(|m| m.as_str()).collect()
    }
}

impl<S> RouteBinder for Router<S> {
    type Handler = Handler<S>;
    type Error = RouteError;

    fn bind(&mut self, method: Method, path: &str, handler: Handler<S>) -> Result<(), RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath(path.to_string()));
        }

        let methods = self.routes.entry(path.to_string()).or_default();
        if methods.contains_key(&method) {
            return Err(RouteError::Conflict {
                method,
                path: path.to_string(),
            });
        }

        methods.insert(method, handler);
        Ok(())
    }
}

fn write_plain(sink: &mut dyn ResponseSink, status: StatusCode, allow: Option<&str>) {
    sink.set_header("Content-Type", "text/plain; charset=utf-8");
    if let Some(allow) = allow {
        sink.set_header("Allow", allow);
    }
    sink.write_status(status);
    let body = format!("{} {}", status.as_u16(), status.reason_phrase());
    if let Err(e) = sink.write_all(body.as_bytes()) {
        tracing::debug!(error = %e, "failed to write routing error body");
    }
}

/// A router together with the state its handlers receive.
pub struct Service<S> {
    router: Router<S>,
    state: S,
}

impl<S> Service<S> {
    pub fn new(router: Router<S>, state: S) -> Self {
        Self { router, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Dispatches `req` and collects the response.
    ///
    /// For `HEAD` the body is dropped after the fact, so `Content-Length`
    /// still reports what a `GET` would have sent.
    pub fn handle(&self, req: &Request) -> Response {
        let mut recorder = ResponseRecorder::new();
        self.router.dispatch(&self.state, req, &mut recorder);
        let mut response = recorder.into_response();
        if req.method == Method::HEAD {
            response.body.clear();
        }
        response
    }
}
