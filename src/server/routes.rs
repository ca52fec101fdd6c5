//! The routes the `apikit` binary serves.

use crate::api::{ApiFacade, DownloadableFile, ErrorLog};
use crate::http::request::{Method, Request};
use crate::http::sink::ResponseSink;
use crate::router::{RouteError, Router, Service, handler};

/// State every handler receives.
pub type AppState = ApiFacade<'static>;

/// Registers the bundled routes and pairs them with their facade.
pub fn build(log: &'static dyn ErrorLog) -> Result<Service<AppState>, RouteError> {
    let mut router: Router<AppState> = Router::new();
    let mut api: AppState = ApiFacade::new(log);

    api.register_route(&mut router, handler(health), Method::GET, "/health", "Liveness probe")?;
    api.register_route(
        &mut router,
        handler(list_routes),
        Method::GET,
        "/routes",
        "Registered routes and their descriptions",
    )?;
    api.register_route(
        &mut router,
        handler(routes_txt),
        Method::GET,
        "/routes.txt",
        "Route listing as a text download; ?disposition=inline to view in place",
    )?;
    api.register_route(
        &mut router,
        handler(echo),
        Method::POST,
        "/echo",
        "Echoes a JSON request body",
    )?;
    api.register_route(
        &mut router,
        handler(admin),
        Method::GET,
        "/admin",
        "Administrative endpoint, always refused",
    )?;

    router.fallback(handler(not_found));

    Ok(Service::new(router, api))
}

fn health(api: &AppState, _req: &Request, sink: &mut dyn ResponseSink) {
    api.send_ok(sink, &serde_json::json!({ "status": "ok" }));
}

fn list_routes(api: &AppState, _req: &Request, sink: &mut dyn ResponseSink) {
    api.send_ok(sink, api.routes());
}

fn routes_txt(api: &AppState, req: &Request, sink: &mut dyn ResponseSink) {
    let listing: String = api
        .routes()
        .iter()
        .map(|(path, description)| format!("{path}\t{description}\n"))
        .collect();

    let file = DownloadableFile::new("routes.txt", "text/plain; charset=utf-8", listing);
    api.send_download(sink, &file, req.query_param("disposition").unwrap_or_default());
}

fn echo(api: &AppState, req: &Request, sink: &mut dyn ResponseSink) {
    match serde_json::from_slice::<serde_json::Value>(&req.body) {
        Ok(value) => api.send_ok(sink, &value),
        Err(e) => api.send_bad(sink, &format!("invalid JSON body: {e}")),
    }
}

fn admin(api: &AppState, _req: &Request, sink: &mut dyn ResponseSink) {
    api.send_access_denied(sink, "administrative access is disabled");
}

fn not_found(api: &AppState, req: &Request, sink: &mut dyn ResponseSink) {
    api.send_not_found(
        sink,
        &format!("no route for {} {}", req.method, req.route_path()),
    );
}
