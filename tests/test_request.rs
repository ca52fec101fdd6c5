use apikit::http::request::{Method, RequestBuilder};

#[test]
fn test_request_header_lookup_ignores_case() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .header("Content-Type", "application/json")
        .build()
        .unwrap();

    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/echo")
        .header("Content-Length", "42")
        .build()
        .unwrap();
    assert_eq!(req.content_length(), 42);

    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/echo")
        .header("Content-Length", "not-a-number")
        .build()
        .unwrap();
    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_keep_alive_defaults_by_version() {
    let http11 = RequestBuilder::new().method(Method::GET).path("/").build().unwrap();
    assert!(http11.keep_alive());

    let http10 = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .version("HTTP/1.0")
        .build()
        .unwrap();
    assert!(!http10.keep_alive());
}

#[test]
fn test_request_keep_alive_connection_header() {
    let close = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .header("Connection", "close")
        .build()
        .unwrap();
    assert!(!close.keep_alive());

    let keep = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .version("HTTP/1.0")
        .header("Connection", "Keep-Alive")
        .build()
        .unwrap();
    assert!(keep.keep_alive());
}

#[test]
fn test_request_route_path_and_query() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/routes.txt?disposition=inline&flag")
        .build()
        .unwrap();

    assert_eq!(req.route_path(), "/routes.txt");
    assert_eq!(req.query(), Some("disposition=inline&flag"));
    assert_eq!(req.query_param("disposition"), Some("inline"));
    assert_eq!(req.query_param("flag"), Some(""));
    assert_eq!(req.query_param("missing"), None);
}

#[test]
fn test_request_without_query() {
    let req = RequestBuilder::new().method(Method::GET).path("/health").build().unwrap();

    assert_eq!(req.route_path(), "/health");
    assert_eq!(req.query(), None);
    assert_eq!(req.query_param("disposition"), None);
}

#[test]
fn test_method_parse_and_display() {
    assert_eq!(Method::parse("GET"), Some(Method::GET));
    assert_eq!(Method::parse("PATCH"), Some(Method::PATCH));
    assert_eq!(Method::parse("get"), None);
    assert_eq!(Method::DELETE.to_string(), "DELETE");
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}
